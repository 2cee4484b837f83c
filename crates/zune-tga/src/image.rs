/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An owned, editable TGA image
use alloc::vec;
use alloc::vec::Vec;

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteReaderTrait, ZByteWriterTrait};
use zune_core::colorspace::ColorSpace;
use zune_core::options::{DecoderOptions, EncoderOptions};

use crate::color::TgaColor;
use crate::decoder::TgaDecoder;
use crate::encoder::TgaEncoder;
use crate::errors::{TgaDecodeErrors, TgaEncodeErrors};
use crate::header::PixelFormat;
use crate::utils::{flip_horizontal, flip_vertical};

/// A decoded image
///
/// Pixels are stored row major, top row first, with channels
/// in B,G,R,A order. The buffer always holds exactly
/// `width * height * channels` bytes.
///
/// # Example
/// ```
/// use zune_tga::{PixelFormat, TgaColor, TgaImage};
///
/// let mut image = TgaImage::new(4, 4, PixelFormat::Rgb);
/// image.set(1, 2, TgaColor::from_rgb(255, 0, 0));
/// image.flip_vertically();
///
/// assert_eq!(image.get(1, 1), TgaColor::from_rgb(255, 0, 0));
///
/// let mut file = vec![];
/// image.save(&mut file, false, true).unwrap();
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TgaImage {
    width:  usize,
    height: usize,
    format: PixelFormat,
    data:   Vec<u8>
}

fn buffer_size(width: usize, height: usize, format: PixelFormat) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(format.channels())
}

impl TgaImage {
    /// Create a zero filled image
    ///
    /// # Panics
    /// If `width * height * channels` does not fit in a `usize`,
    /// which can only happen on targets narrower than 64 bits
    pub fn new(width: u16, height: u16, format: PixelFormat) -> TgaImage {
        let width = usize::from(width);
        let height = usize::from(height);
        let size = buffer_size(width, height, format).unwrap_or_else(|| {
            panic!("{width}x{height} image does not fit in memory");
        });

        TgaImage {
            width,
            height,
            format,
            data: vec![0; size]
        }
    }
    /// Wrap an existing buffer
    ///
    /// Returns `None` if `data` is not exactly `width * height * channels`
    /// bytes long, or if that product overflows a `usize`
    pub fn from_raw(width: u16, height: u16, format: PixelFormat, data: Vec<u8>) -> Option<TgaImage> {
        let width = usize::from(width);
        let height = usize::from(height);

        if data.len() != buffer_size(width, height, format)? {
            return None;
        }
        Some(TgaImage {
            width,
            height,
            format,
            data
        })
    }

    /// Decode an image from `source`
    ///
    /// No dimension limits are applied, anything [`save`](Self::save) can
    /// write is accepted. Use [`load_with_options`](Self::load_with_options)
    /// with [`DecoderOptions::default`] to cap width and height.
    pub fn load<T: ZByteReaderTrait>(source: T) -> Result<TgaImage, TgaDecodeErrors> {
        TgaImage::load_with_options(source, DecoderOptions::new_cmd())
    }

    pub fn load_with_options<T: ZByteReaderTrait>(
        source: T, options: DecoderOptions
    ) -> Result<TgaImage, TgaDecodeErrors> {
        TgaDecoder::new_with_options(source, options).decode_image()
    }

    /// Encode the image into `sink`
    ///
    /// # Arguments
    /// - `vflip`: declare a bottom-left origin instead of top-left, the pixel
    ///   rows themselves are written in buffer order
    /// - `rle`: run length encode the payload
    ///
    /// Returns the number of bytes written
    pub fn save<T: ZByteWriterTrait>(
        &self, sink: T, vflip: bool, rle: bool
    ) -> Result<usize, TgaEncodeErrors> {
        let options = EncoderOptions::new(
            self.width,
            self.height,
            self.format.colorspace(),
            BitDepth::Eight
        )
        .tga_set_rle(rle)
        .tga_set_vflip(vflip);

        TgaEncoder::new(&self.data, options).encode(sink)
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * self.format.channels())
    }

    /// Bytes of the pixel at `(x, y)`, `None` if out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let start = self.offset(x, y)?;
        self.data.get(start..start + self.format.channels())
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8]> {
        let start = self.offset(x, y)?;
        let channels = self.format.channels();
        self.data.get_mut(start..start + channels)
    }

    /// Color at `(x, y)`
    ///
    /// Out of bounds coordinates return [`TgaColor::zero`]
    pub fn get(&self, x: usize, y: usize) -> TgaColor {
        match self.pixel(x, y) {
            Some(px) => TgaColor::from_slice(px),
            None => TgaColor::zero()
        }
    }

    /// Overwrite the pixel at `(x, y)` with the first `channels` bytes of
    /// `color`, out of bounds coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, color: TgaColor) {
        let bgra = color.bgra();

        if let Some(px) = self.pixel_mut(x, y) {
            let channels = px.len();
            px.copy_from_slice(&bgra[..channels]);
        }
    }

    pub fn flip_horizontally(&mut self) {
        flip_horizontal(&mut self.data, self.width, self.format.channels());
    }

    pub fn flip_vertically(&mut self) {
        flip_vertical(&mut self.data, self.width * self.format.channels());
    }

    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    pub const fn format(&self) -> PixelFormat {
        self.format
    }
    pub const fn colorspace(&self) -> ColorSpace {
        self.format.colorspace()
    }
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::color::TgaColor;
    use crate::header::PixelFormat;
    use crate::image::{buffer_size, TgaImage};

    #[test]
    fn out_of_bounds_access_is_harmless() {
        let mut image = TgaImage::new(2, 2, PixelFormat::Rgba);

        image.set(2, 0, TgaColor::from_rgba(1, 2, 3, 4));
        image.set(0, usize::MAX, TgaColor::from_rgba(1, 2, 3, 4));

        assert!(image.data().iter().all(|x| *x == 0));
        assert!(image.get(5, 5).is_zero());
        assert!(image.pixel(2, 1).is_none());
    }

    #[test]
    fn set_copies_leading_channels() {
        let mut image = TgaImage::new(1, 1, PixelFormat::Grayscale);
        image.set(0, 0, TgaColor::from_rgba(1, 2, 3, 4));
        assert_eq!(image.data(), [3]);

        let mut image = TgaImage::new(1, 1, PixelFormat::Rgba);
        image.set(0, 0, TgaColor::gray(200));
        assert_eq!(image.get(0, 0).as_slice(), [200, 0, 0, 0]);
    }

    #[test]
    fn empty_image() {
        let image = TgaImage::new(0, 3, PixelFormat::Rgb);
        assert!(image.get(0, 0).is_zero());
        assert!(image.data().is_empty());
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(TgaImage::from_raw(2, 2, PixelFormat::Rgb, vec![0; 11]).is_none());
        let image = TgaImage::from_raw(2, 2, PixelFormat::Rgb, vec![7; 12]).unwrap();
        assert_eq!(image.into_raw(), vec![7; 12]);
    }

    #[test]
    fn buffer_size_overflow_is_none() {
        assert_eq!(buffer_size(usize::MAX, 2, PixelFormat::Grayscale), None);
        assert_eq!(buffer_size(usize::MAX / 2, 1, PixelFormat::Rgb), None);
        assert_eq!(buffer_size(3, 2, PixelFormat::Rgba), Some(24));
    }

    #[test]
    fn largest_image_size_is_exact() {
        let expected = 65535_u64 * 65535 * 4;
        match usize::try_from(expected) {
            Ok(len) => assert_eq!(buffer_size(65535, 65535, PixelFormat::Rgba), Some(len)),
            Err(_) => assert_eq!(buffer_size(65535, 65535, PixelFormat::Rgba), None)
        }
        // too large for an allocation in a test, only the length check runs
        assert!(TgaImage::from_raw(u16::MAX, u16::MAX, PixelFormat::Rgba, vec![]).is_none());
    }

    #[test]
    fn flips() {
        let pixels = vec![1, 2, 3, 4, 5, 6];
        let mut image = TgaImage::from_raw(3, 2, PixelFormat::Grayscale, pixels).unwrap();

        image.flip_horizontally();
        assert_eq!(image.data(), [3, 2, 1, 6, 5, 4]);
        image.flip_vertically();
        assert_eq!(image.data(), [6, 5, 4, 3, 2, 1]);
    }
}
