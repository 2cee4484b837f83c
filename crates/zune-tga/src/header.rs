/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The fixed 18 byte TGA header
//!
//! The header is parsed as-is, no field is validated here,
//! validation happens in the decoder once the whole header is known.
use zune_core::bytestream::{
    ZByteIoError, ZByteReaderTrait, ZByteWriterTrait, ZCursor, ZReader, ZWriter
};
use zune_core::colorspace::ColorSpace;

use crate::constants::{
    TGA_DESCRIPTOR_RIGHT_ORIGIN, TGA_DESCRIPTOR_TOP_ORIGIN, TGA_TYPE_GRAY, TGA_TYPE_RGB,
    TGA_TYPE_RLE_GRAY, TGA_TYPE_RLE_RGB
};
use crate::errors::TgaDecodeErrors;

/// Image types understood by this library
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageType {
    /// Uncompressed truecolor, code 2
    Rgb,
    /// Uncompressed grayscale, code 3
    Gray,
    /// Run length encoded truecolor, code 10
    RleRgb,
    /// Run length encoded grayscale, code 11
    RleGray
}

impl ImageType {
    /// Map a header type code to an image type, returning `None`
    /// for codes we do not support (no-image, palette, ...)
    pub const fn from_u8(code: u8) -> Option<ImageType> {
        match code {
            TGA_TYPE_RGB => Some(ImageType::Rgb),
            TGA_TYPE_GRAY => Some(ImageType::Gray),
            TGA_TYPE_RLE_RGB => Some(ImageType::RleRgb),
            TGA_TYPE_RLE_GRAY => Some(ImageType::RleGray),
            _ => None
        }
    }
    pub const fn to_u8(self) -> u8 {
        match self {
            ImageType::Rgb => TGA_TYPE_RGB,
            ImageType::Gray => TGA_TYPE_GRAY,
            ImageType::RleRgb => TGA_TYPE_RLE_RGB,
            ImageType::RleGray => TGA_TYPE_RLE_GRAY
        }
    }
    /// Return true if the payload is stored as run length packets
    pub const fn is_rle(self) -> bool {
        matches!(self, ImageType::RleRgb | ImageType::RleGray)
    }
    /// Pick the type code for an image with `channels` bytes per pixel
    pub const fn for_format(format: PixelFormat, rle: bool) -> ImageType {
        match (format, rle) {
            (PixelFormat::Grayscale, false) => ImageType::Gray,
            (PixelFormat::Grayscale, true) => ImageType::RleGray,
            (_, false) => ImageType::Rgb,
            (_, true) => ImageType::RleRgb
        }
    }
}

/// Layout of a single pixel
///
/// The discriminant is the number of bytes per pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelFormat {
    Grayscale = 1,
    /// Stored as B,G,R
    Rgb = 3,
    /// Stored as B,G,R,A
    Rgba = 4
}

impl PixelFormat {
    pub const fn from_channels(channels: usize) -> Option<PixelFormat> {
        match channels {
            1 => Some(PixelFormat::Grayscale),
            3 => Some(PixelFormat::Rgb),
            4 => Some(PixelFormat::Rgba),
            _ => None
        }
    }
    pub const fn from_bits_per_pixel(bpp: u8) -> Option<PixelFormat> {
        match bpp {
            8 => Some(PixelFormat::Grayscale),
            24 => Some(PixelFormat::Rgb),
            32 => Some(PixelFormat::Rgba),
            _ => None
        }
    }
    pub const fn from_colorspace(colorspace: ColorSpace) -> Option<PixelFormat> {
        match colorspace {
            ColorSpace::Luma => Some(PixelFormat::Grayscale),
            ColorSpace::BGR => Some(PixelFormat::Rgb),
            ColorSpace::BGRA => Some(PixelFormat::Rgba),
            _ => None
        }
    }
    pub const fn channels(self) -> usize {
        self as usize
    }
    pub const fn bits_per_pixel(self) -> u8 {
        (self as u8) * 8
    }
    /// The colorspace pixels of this format are laid out in
    pub const fn colorspace(self) -> ColorSpace {
        match self {
            PixelFormat::Grayscale => ColorSpace::Luma,
            PixelFormat::Rgb => ColorSpace::BGR,
            PixelFormat::Rgba => ColorSpace::BGRA
        }
    }
}

/// A TGA file header, every field exactly as stored
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TgaHeader {
    pub id_length:        u8,
    pub color_map_type:   u8,
    pub image_type:       u8,
    /// First entry index, length and entry size of the color map,
    /// carried through untouched
    pub color_map_spec:   [u8; 5],
    pub x_origin:         u16,
    pub y_origin:         u16,
    pub width:            u16,
    pub height:           u16,
    pub bits_per_pixel:   u8,
    pub image_descriptor: u8
}

impl TgaHeader {
    /// Build the header a fresh save writes for an image
    ///
    /// Image ID and color map are always empty, `vflip` selects
    /// a bottom-left origin instead of top-left
    pub const fn for_image(
        width: u16, height: u16, format: PixelFormat, rle: bool, vflip: bool
    ) -> TgaHeader {
        TgaHeader {
            id_length:        0,
            color_map_type:   0,
            image_type:       ImageType::for_format(format, rle).to_u8(),
            color_map_spec:   [0; 5],
            x_origin:         0,
            y_origin:         0,
            width,
            height,
            bits_per_pixel:   format.bits_per_pixel(),
            image_descriptor: if vflip { 0 } else { TGA_DESCRIPTOR_TOP_ORIGIN }
        }
    }

    /// Interpret the first 18 bytes of `bytes` as a header
    ///
    /// # Errors
    /// [`TgaDecodeErrors::TruncatedHeader`] if fewer than 18 bytes are given
    pub fn parse(bytes: &[u8]) -> Result<TgaHeader, TgaDecodeErrors> {
        TgaHeader::read(&mut ZReader::new(ZCursor::new(bytes)))
    }

    /// Read the header from the current position of `stream`
    ///
    /// # Errors
    /// - [`TgaDecodeErrors::TruncatedHeader`] with the number of bytes found
    ///   if the source ends before the header does
    /// - [`TgaDecodeErrors::IoErrors`] if the source itself fails
    pub fn read<T: ZByteReaderTrait>(stream: &mut ZReader<T>) -> Result<TgaHeader, TgaDecodeErrors> {
        let start = stream.position();

        match TgaHeader::read_fields(stream) {
            Ok(header) => Ok(header),
            Err(ZByteIoError::NotEnoughBytes(_, found)) => {
                let consumed = (stream.position() - start) as usize;
                Err(TgaDecodeErrors::TruncatedHeader(consumed + found))
            }
            Err(e) => Err(TgaDecodeErrors::IoErrors(e))
        }
    }

    fn read_fields<T: ZByteReaderTrait>(stream: &mut ZReader<T>) -> Result<TgaHeader, ZByteIoError> {
        Ok(TgaHeader {
            id_length:        stream.get_u8_err()?,
            color_map_type:   stream.get_u8_err()?,
            image_type:       stream.get_u8_err()?,
            color_map_spec:   stream.read_fixed_bytes_or_error::<5>()?,
            x_origin:         stream.get_u16_le_err()?,
            y_origin:         stream.get_u16_le_err()?,
            width:            stream.get_u16_le_err()?,
            height:           stream.get_u16_le_err()?,
            bits_per_pixel:   stream.get_u8_err()?,
            image_descriptor: stream.get_u8_err()?
        })
    }

    /// Serialize the header into `stream`, 18 bytes, little endian, no padding
    pub fn write<T: ZByteWriterTrait>(&self, stream: &mut ZWriter<T>) -> Result<(), ZByteIoError> {
        stream.write_u8_err(self.id_length)?;
        stream.write_u8_err(self.color_map_type)?;
        stream.write_u8_err(self.image_type)?;
        stream.write_const_bytes(&self.color_map_spec)?;
        stream.write_u16_le_err(self.x_origin)?;
        stream.write_u16_le_err(self.y_origin)?;
        stream.write_u16_le_err(self.width)?;
        stream.write_u16_le_err(self.height)?;
        stream.write_u8_err(self.bits_per_pixel)?;
        stream.write_u8_err(self.image_descriptor)
    }

    pub const fn kind(&self) -> Option<ImageType> {
        ImageType::from_u8(self.image_type)
    }
    pub const fn pixel_format(&self) -> Option<PixelFormat> {
        PixelFormat::from_bits_per_pixel(self.bits_per_pixel)
    }
    /// Rows are stored top to bottom
    pub const fn is_top_origin(&self) -> bool {
        (self.image_descriptor & TGA_DESCRIPTOR_TOP_ORIGIN) != 0
    }
    /// Columns are stored right to left
    pub const fn is_right_origin(&self) -> bool {
        (self.image_descriptor & TGA_DESCRIPTOR_RIGHT_ORIGIN) != 0
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use zune_core::bytestream::ZWriter;

    use crate::errors::TgaDecodeErrors;
    use crate::header::{ImageType, PixelFormat, TgaHeader};

    fn serialize(header: &TgaHeader) -> Vec<u8> {
        let mut out = Vec::new();
        header.write(&mut ZWriter::new(&mut out)).unwrap();
        out
    }

    #[test]
    fn parse_reads_little_endian_fields() {
        let bytes = [
            3_u8, 0, 10, 0, 0, 0, 0, 0, 1, 0, 2, 0, 0x2c, 0x01, 0xc8, 0x00, 24, 0x20
        ];
        let header = TgaHeader::parse(&bytes).unwrap();

        assert_eq!(header.id_length, 3);
        assert_eq!(header.kind(), Some(ImageType::RleRgb));
        assert_eq!(header.x_origin, 1);
        assert_eq!(header.y_origin, 2);
        assert_eq!(header.width, 300);
        assert_eq!(header.height, 200);
        assert_eq!(header.pixel_format(), Some(PixelFormat::Rgb));
        assert!(header.is_top_origin());
        assert!(!header.is_right_origin());
        assert_eq!(serialize(&header), bytes);
    }

    #[test]
    fn short_header_reports_bytes_found() {
        for len in [0, 1, 9, 17] {
            let err = TgaHeader::parse(&[0; 17][..len]).unwrap_err();
            assert_eq!(err.kind(), crate::TgaErrorKind::HeaderError);
            assert!(matches!(err, TgaDecodeErrors::TruncatedHeader(found) if found == len));
        }
    }

    #[test]
    fn fresh_header_layout() {
        let header = TgaHeader::for_image(2, 1, PixelFormat::Grayscale, true, true);
        assert_eq!(
            serialize(&header),
            [0, 0, 11, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 8, 0]
        );
        let header = TgaHeader::for_image(2, 1, PixelFormat::Rgba, false, false);
        assert_eq!(header.image_type, 2);
        assert_eq!(header.bits_per_pixel, 32);
        assert_eq!(header.image_descriptor, 0x20);
        assert_eq!(serialize(&header).len(), 18);
    }
}
