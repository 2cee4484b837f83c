/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteWriterTrait, ZWriter};
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_core::options::EncoderOptions;

use crate::constants::{TGA_FOOTER, TGA_FOOTER_SIZE, TGA_HEADER_SIZE};
use crate::errors::TgaEncodeErrors;
use crate::header::{PixelFormat, TgaHeader};
use crate::rle::{encode_rle, max_encoded_size};

const SUPPORTED_COLORSPACES: [ColorSpace; 3] = [ColorSpace::Luma, ColorSpace::BGR, ColorSpace::BGRA];

/// A TGA encoder
///
/// Pixels are expected in B,G,R(,A) order and are written exactly in the
/// order they are given. By default the payload is run length encoded
/// and the header declares a top-left origin, see
/// [`EncoderOptions::tga_set_rle`] and [`EncoderOptions::tga_set_vflip`].
///
/// # Example
/// ```
/// use zune_core::bit_depth::BitDepth;
/// use zune_core::colorspace::ColorSpace;
/// use zune_core::options::EncoderOptions;
/// use zune_tga::{TgaEncodeErrors, TgaEncoder};
///
/// fn main() -> Result<(), TgaEncodeErrors> {
///     let pixels = [30, 20, 10, 30, 20, 10];
///     let options = EncoderOptions::new(2, 1, ColorSpace::BGR, BitDepth::Eight);
///     let mut sink = vec![];
///
///     let written = TgaEncoder::new(&pixels, options).encode(&mut sink)?;
///
///     assert_eq!(written, sink.len());
///     assert_eq!(&sink[18..22], &[129, 30, 20, 10]);
///     Ok(())
/// }
/// ```
pub struct TgaEncoder<'a> {
    pixel_data: &'a [u8],
    options:    EncoderOptions
}

impl<'a> TgaEncoder<'a> {
    /// Create a new encoder
    ///
    /// # Arguments
    /// - data: Pixel data, size must be equal to `width*height*colorspace channels`
    /// - options: width, height, colorspace and TGA specific flags
    #[allow(clippy::redundant_field_names)]
    pub const fn new(data: &'a [u8], options: EncoderOptions) -> TgaEncoder<'a> {
        TgaEncoder {
            pixel_data: data,
            options:    options
        }
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    pub fn max_size(&self) -> usize {
        let channels = self.options.colorspace().num_components();
        let len = self
            .options
            .width()
            .saturating_mul(self.options.height())
            .saturating_mul(channels);

        TGA_HEADER_SIZE + max_encoded_size(len, channels) + TGA_FOOTER_SIZE
    }

    fn header(&self) -> Result<TgaHeader, TgaEncodeErrors> {
        let options = &self.options;

        let format = PixelFormat::from_colorspace(options.colorspace()).ok_or(
            TgaEncodeErrors::UnsupportedColorspace(options.colorspace(), &SUPPORTED_COLORSPACES)
        )?;

        if options.depth() != BitDepth::Eight {
            return Err(TgaEncodeErrors::UnsupportedDepth(options.depth()));
        }
        if options.width() == 0 || options.height() == 0 {
            return Err(TgaEncodeErrors::ZeroDimensions(options.width(), options.height()));
        }
        if options.width() > usize::from(u16::MAX) {
            return Err(TgaEncodeErrors::TooLargeDimensions(options.width()));
        }
        if options.height() > usize::from(u16::MAX) {
            return Err(TgaEncodeErrors::TooLargeDimensions(options.height()));
        }
        let expected_len = options
            .width()
            .checked_mul(options.height())
            .and_then(|x| x.checked_mul(format.channels()))
            .ok_or(TgaEncodeErrors::Generic("Image size does not fit in memory"))?;

        if self.pixel_data.len() != expected_len {
            return Err(TgaEncodeErrors::WrongInputSize(
                expected_len,
                self.pixel_data.len()
            ));
        }
        // checked above that they fit
        Ok(TgaHeader::for_image(
            options.width() as u16,
            options.height() as u16,
            format,
            options.tga_get_rle(),
            options.tga_get_vflip()
        ))
    }

    /// Encode the image into `sink`
    ///
    /// Nothing is written if the options do not describe a valid image.
    ///
    /// # Returns
    /// - Ok(size): Bytes written to the sink
    /// - Err: The error encountered during encoding
    pub fn encode<T: ZByteWriterTrait>(&mut self, sink: T) -> Result<usize, TgaEncodeErrors> {
        let header = self.header()?;
        let channels = self.options.colorspace().num_components();

        let mut stream = ZWriter::new(sink);
        stream.reserve(self.max_size())?;

        header.write(&mut stream)?;

        if self.options.tga_get_rle() {
            trace!("Writing run length encoded payload");

            let pixels = encode_rle(self.pixel_data, channels, &mut stream)?;

            if pixels != self.options.width() * self.options.height() {
                return Err(TgaEncodeErrors::Generic(
                    "Run length packets do not cover the whole image"
                ));
            }
        } else {
            trace!("Writing raw payload");
            stream.write_all(self.pixel_data)?;
        }
        stream.write_const_bytes(&TGA_FOOTER)?;
        stream.flush()?;

        Ok(stream.bytes_written())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use zune_core::bit_depth::BitDepth;
    use zune_core::colorspace::ColorSpace;
    use zune_core::options::EncoderOptions;

    use crate::constants::TGA_FOOTER;
    use crate::encoder::TgaEncoder;
    use crate::errors::TgaEncodeErrors;
    use crate::TgaErrorKind;

    #[test]
    fn raw_layout() {
        let pixels = [1, 2, 3, 4, 5, 6];
        let options = EncoderOptions::new(2, 1, ColorSpace::BGR, BitDepth::Eight)
            .tga_set_rle(false)
            .tga_set_vflip(true);
        let mut sink = Vec::new();

        let written = TgaEncoder::new(&pixels, options).encode(&mut sink).unwrap();

        assert_eq!(written, 18 + 6 + 26);
        assert_eq!(
            &sink[..18],
            &[0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 1, 0, 24, 0]
        );
        assert_eq!(&sink[18..24], &pixels);
        assert_eq!(&sink[24..], &TGA_FOOTER);
    }

    #[test]
    fn grayscale_rle_type_code() {
        let pixels = [9; 6];
        let options = EncoderOptions::new(3, 2, ColorSpace::Luma, BitDepth::Eight);
        let mut sink = Vec::new();

        TgaEncoder::new(&pixels, options).encode(&mut sink).unwrap();

        assert_eq!(sink[2], 11);
        assert_eq!(sink[16], 8);
        assert_eq!(sink[17], 0x20);
        assert_eq!(&sink[18..20], &[133, 9]);
    }

    #[test]
    fn max_size_is_an_upper_bound() {
        let pixels: Vec<u8> = (0..=255).cycle().take(300 * 4).collect();
        let options = EncoderOptions::new(30, 10, ColorSpace::BGRA, BitDepth::Eight);
        let mut encoder = TgaEncoder::new(&pixels, options);
        let mut sink = Vec::new();

        let written = encoder.encode(&mut sink).unwrap();
        assert!(written <= encoder.max_size());
    }

    #[test]
    fn invalid_inputs_write_nothing() {
        let mut sink = Vec::new();

        let options = EncoderOptions::new(2, 2, ColorSpace::RGB, BitDepth::Eight);
        let err = TgaEncoder::new(&[0; 12], options).encode(&mut sink).unwrap_err();
        assert!(matches!(err, TgaEncodeErrors::UnsupportedColorspace(ColorSpace::RGB, _)));

        let options = EncoderOptions::new(2, 2, ColorSpace::Luma, BitDepth::Eight);
        let err = TgaEncoder::new(&[0; 3], options).encode(&mut sink).unwrap_err();
        assert!(matches!(err, TgaEncodeErrors::WrongInputSize(4, 3)));

        let options = EncoderOptions::new(0, 2, ColorSpace::Luma, BitDepth::Eight);
        let err = TgaEncoder::new(&[], options).encode(&mut sink).unwrap_err();
        assert_eq!(err.kind(), TgaErrorKind::InvalidInput);

        let options = EncoderOptions::new(70000, 1, ColorSpace::Luma, BitDepth::Eight);
        let err = TgaEncoder::new(&[], options).encode(&mut sink).unwrap_err();
        assert!(matches!(err, TgaEncodeErrors::TooLargeDimensions(70000)));

        let options = EncoderOptions::new(1, 1, ColorSpace::Luma, BitDepth::Sixteen);
        let err = TgaEncoder::new(&[0, 0], options).encode(&mut sink).unwrap_err();
        assert!(matches!(err, TgaEncodeErrors::UnsupportedDepth(BitDepth::Sixteen)));

        assert!(sink.is_empty());
    }

    #[test]
    fn full_sink_is_a_sink_error() {
        let pixels = [1; 16];
        let options = EncoderOptions::new(4, 4, ColorSpace::Luma, BitDepth::Eight);
        let mut space = [0_u8; 20];

        let err = TgaEncoder::new(&pixels, options)
            .encode(&mut space[..])
            .unwrap_err();
        assert_eq!(err.kind(), TgaErrorKind::SinkUnavailable);
    }
}
