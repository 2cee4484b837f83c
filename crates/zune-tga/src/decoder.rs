/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::errors::{payload_error, TgaDecodeErrors};
use crate::header::{ImageType, PixelFormat, TgaHeader};
use crate::image::TgaImage;
use crate::rle::decode_rle;
use crate::utils::{flip_horizontal, flip_vertical};

/// Probe some bytes to see
/// if they consist of a TGA image
///
/// TGA has no magic bytes at the start, so this checks that the
/// header describes something this decoder understands: a truecolor or
/// grayscale type code, 8, 24 or 32 bits per pixel, no color map and
/// non-zero dimensions.
pub fn probe_tga(bytes: &[u8]) -> bool {
    match TgaHeader::parse(bytes) {
        Ok(header) => {
            header.color_map_type == 0
                && header.kind().is_some()
                && header.pixel_format().is_some()
                && header.width != 0
                && header.height != 0
        }
        Err(_) => false
    }
}

/// A TGA decoder
///
/// Decodes uncompressed and run length encoded truecolor and grayscale
/// images. Pixels are returned top to bottom, left to right, in the
/// order the file stores channels (B,G,R,A), whatever the origin
/// the file declares.
///
/// # Example
/// ```
/// use zune_core::bytestream::ZCursor;
/// use zune_tga::TgaDecoder;
///
/// // 1x1 grayscale, top-left origin
/// let mut file = vec![0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 8, 0x20];
/// file.push(127);
///
/// let mut decoder = TgaDecoder::new(ZCursor::new(&file));
/// let pixels = decoder.decode().unwrap();
/// assert_eq!(pixels, [127]);
/// ```
pub struct TgaDecoder<T>
where
    T: ZByteReaderTrait
{
    stream:          ZReader<T>,
    options:         DecoderOptions,
    header:          TgaHeader,
    image_type:      ImageType,
    format:          PixelFormat,
    image_id:        Vec<u8>,
    width:           usize,
    height:          usize,
    decoded_headers: bool
}

impl<T> TgaDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new decoder with default options
    pub fn new(data: T) -> TgaDecoder<T> {
        TgaDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new decoder that respects `options`
    ///
    /// Width and height limits and strict mode are honoured
    ///
    /// # Example
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// use zune_core::options::DecoderOptions;
    /// use zune_tga::TgaDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    /// let decoder = TgaDecoder::new_with_options(ZCursor::new([0_u8; 0]), options);
    /// ```
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_options(data: T, options: DecoderOptions) -> TgaDecoder<T> {
        TgaDecoder {
            stream:          ZReader::new(data),
            options:         options,
            header:          TgaHeader::default(),
            image_type:      ImageType::Rgb,
            format:          PixelFormat::Rgb,
            image_id:        Vec::new(),
            width:           0,
            height:          0,
            decoded_headers: false
        }
    }

    /// Read and validate the header and the image ID that follows it
    ///
    /// After this returns successfully, [`dimensions`](Self::dimensions),
    /// [`colorspace`](Self::colorspace) and [`header`](Self::header) return
    /// information about the image.
    pub fn decode_headers(&mut self) -> Result<(), TgaDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let header = TgaHeader::read(&mut self.stream)?;

        trace!("Image type: {}", header.image_type);
        trace!("Image width: {}", header.width);
        trace!("Image height: {}", header.height);
        trace!("Bits per pixel: {}", header.bits_per_pixel);
        trace!("Image descriptor: {:#04x}", header.image_descriptor);

        let width = usize::from(header.width);
        let height = usize::from(header.height);

        if width == 0 || height == 0 {
            return Err(TgaDecodeErrors::ZeroDimensions(width, height));
        }
        let format = PixelFormat::from_bits_per_pixel(header.bits_per_pixel)
            .ok_or(TgaDecodeErrors::UnsupportedBitsPerPixel(header.bits_per_pixel))?;

        if width > self.options.get_max_width() {
            return Err(TgaDecodeErrors::TooLargeDimensions(
                "width",
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(TgaDecodeErrors::TooLargeDimensions(
                "height",
                self.options.get_max_height(),
                height
            ));
        }
        if header.color_map_type != 0 {
            if self.options.get_strict_mode() {
                return Err(TgaDecodeErrors::UnsupportedColorMap(header.color_map_type));
            }
            warn!(
                "Color map type {} ignored, image is decoded as truecolor/grayscale",
                header.color_map_type
            );
        }
        let image_type = header
            .kind()
            .ok_or(TgaDecodeErrors::UnsupportedTypeCode(header.image_type))?;

        if header.id_length != 0 {
            warn!("Skipping {} bytes of image ID", header.id_length);

            let mut id = vec![0; usize::from(header.id_length)];

            let payload_len = width
                .saturating_mul(height)
                .saturating_mul(format.channels());

            self.stream
                .read_exact_bytes(&mut id)
                .map_err(|e| payload_error(e, payload_len, 0))?;

            self.image_id = id;
        }

        self.header = header;
        self.image_type = image_type;
        self.format = format;
        self.width = width;
        self.height = height;
        self.decoded_headers = true;

        Ok(())
    }

    /// Return the number of bytes needed to hold the decoded image
    ///
    /// Returns `None` if headers have not been decoded
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            self.width
                .checked_mul(self.height)?
                .checked_mul(self.format.channels())
        } else {
            None
        }
    }

    /// Decode the image into `pixels`
    ///
    /// `pixels` must be at least [`output_buffer_size`](Self::output_buffer_size)
    /// bytes long, only that many bytes are written.
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), TgaDecodeErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(TgaDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        if pixels.len() < size {
            return Err(TgaDecodeErrors::TooSmallOutput(size, pixels.len()));
        }
        let pixels = &mut pixels[..size];
        let channels = self.format.channels();

        if self.image_type.is_rle() {
            trace!("Decoding run length encoded payload");
            decode_rle(&mut self.stream, pixels, channels)?;
        } else {
            trace!("Decoding raw payload");
            self.decode_raw(pixels)?;
        }

        if !self.header.is_top_origin() {
            trace!("Bottom origin, flipping rows");
            flip_vertical(pixels, self.width * channels);
        }
        if self.header.is_right_origin() {
            trace!("Right origin, flipping columns");
            flip_horizontal(pixels, self.width, channels);
        }
        trace!("Finished decoding image");

        Ok(())
    }

    fn decode_raw(&mut self, pixels: &mut [u8]) -> Result<(), TgaDecodeErrors> {
        let mut filled = 0;

        while filled < pixels.len() {
            match self.stream.read_bytes(&mut pixels[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) => return Err(payload_error(e, pixels.len(), filled))
            }
        }
        if filled != pixels.len() {
            return Err(TgaDecodeErrors::TruncatedPayload(pixels.len(), filled));
        }
        Ok(())
    }

    /// Decode the image returning the pixels
    pub fn decode(&mut self) -> Result<Vec<u8>, TgaDecodeErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(TgaDecodeErrors::GenericStatic("Image dimensions overflow"))?;

        let mut output = vec![0; size];
        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode the image into a [`TgaImage`]
    pub fn decode_image(&mut self) -> Result<TgaImage, TgaDecodeErrors> {
        let pixels = self.decode()?;

        TgaImage::from_raw(self.header.width, self.header.height, self.format, pixels)
            .ok_or(TgaDecodeErrors::GenericStatic(
                "Decoded pixels do not match image dimensions"
            ))
    }

    /// The header as stored in the file
    ///
    /// Returns `None` if headers have not been decoded
    pub fn header(&self) -> Option<&TgaHeader> {
        self.decoded_headers.then_some(&self.header)
    }
    /// Image ID bytes between the header and the pixels,
    /// empty if the file has none
    pub fn image_id(&self) -> &[u8] {
        &self.image_id
    }
    /// Width and height of the image
    ///
    /// Returns `None` if headers have not been decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.decoded_headers.then_some((self.width, self.height))
    }
    /// The layout of decoded pixels, one of Luma, BGR or BGRA
    ///
    /// Returns `None` if headers have not been decoded
    pub fn colorspace(&self) -> Option<ColorSpace> {
        self.decoded_headers.then_some(self.format.colorspace())
    }
    /// The pixel format of the image
    pub fn pixel_format(&self) -> Option<PixelFormat> {
        self.decoded_headers.then_some(self.format)
    }
    /// Bit depth of decoded pixels, TGA images we decode are always eight bit
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }
    /// Return the decoder options in use
    pub const fn options(&self) -> &DecoderOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use zune_core::bytestream::ZCursor;
    use zune_core::colorspace::ColorSpace;
    use zune_core::options::DecoderOptions;

    use crate::decoder::{probe_tga, TgaDecoder};
    use crate::errors::TgaDecodeErrors;
    use crate::TgaErrorKind;

    fn header(image_type: u8, width: u16, height: u16, bpp: u8, descriptor: u8) -> Vec<u8> {
        let w = width.to_le_bytes();
        let h = height.to_le_bytes();
        alloc::vec![
            0, 0, image_type, 0, 0, 0, 0, 0, 0, 0, 0, 0, w[0], w[1], h[0], h[1], bpp, descriptor
        ]
    }

    #[test]
    fn bottom_left_rows_are_flipped() {
        let mut file = header(3, 2, 2, 8, 0);
        file.extend_from_slice(&[1, 2, 3, 4]);

        let mut decoder = TgaDecoder::new(ZCursor::new(&file));
        assert_eq!(decoder.decode().unwrap(), [3, 4, 1, 2]);
        assert_eq!(decoder.dimensions(), Some((2, 2)));
        assert_eq!(decoder.colorspace(), Some(ColorSpace::Luma));
    }

    #[test]
    fn right_origin_columns_are_flipped() {
        let mut file = header(2, 2, 1, 24, 0x30);
        file.extend_from_slice(&[1, 2, 3, 4, 5, 6]);

        let pixels = TgaDecoder::new(ZCursor::new(&file)).decode().unwrap();
        assert_eq!(pixels, [4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn zero_width_is_a_header_error() {
        let mut file = header(2, 0, 4, 24, 0x20);
        file.extend_from_slice(&[0; 12]);

        let err = TgaDecoder::new(ZCursor::new(&file)).decode().unwrap_err();
        assert!(matches!(err, TgaDecodeErrors::ZeroDimensions(0, 4)));
        assert_eq!(err.kind(), TgaErrorKind::HeaderError);
    }

    #[test]
    fn sixteen_bits_per_pixel_is_rejected() {
        let file = header(2, 1, 1, 16, 0x20);
        let err = TgaDecoder::new(ZCursor::new(&file)).decode().unwrap_err();
        assert!(matches!(err, TgaDecodeErrors::UnsupportedBitsPerPixel(16)));
    }

    #[test]
    fn palette_type_is_rejected() {
        let file = header(1, 1, 1, 8, 0x20);
        let err = TgaDecoder::new(ZCursor::new(&file)).decode().unwrap_err();
        assert_eq!(err.kind(), TgaErrorKind::UnsupportedTypeCode);
    }

    #[test]
    fn color_map_depends_on_strict_mode() {
        let mut file = header(3, 1, 1, 8, 0x20);
        file[1] = 1;
        file.push(9);

        let lenient = TgaDecoder::new(ZCursor::new(&file)).decode().unwrap();
        assert_eq!(lenient, [9]);

        let options = DecoderOptions::default().set_strict_mode(true);
        let err = TgaDecoder::new_with_options(ZCursor::new(&file), options)
            .decode()
            .unwrap_err();
        assert!(matches!(err, TgaDecodeErrors::UnsupportedColorMap(1)));
    }

    #[test]
    fn limits_are_respected() {
        let mut file = header(3, 20, 1, 8, 0x20);
        file.extend_from_slice(&[0; 20]);

        let options = DecoderOptions::default().set_max_width(10);
        let err = TgaDecoder::new_with_options(ZCursor::new(&file), options)
            .decode_headers()
            .unwrap_err();
        assert!(matches!(err, TgaDecodeErrors::TooLargeDimensions("width", 10, 20)));
    }

    #[test]
    fn image_id_is_skipped() {
        let mut file = header(3, 2, 1, 8, 0x20);
        file[0] = 3;
        file.extend_from_slice(b"abc");
        file.extend_from_slice(&[7, 8]);

        let mut decoder = TgaDecoder::new(ZCursor::new(&file));
        assert_eq!(decoder.decode().unwrap(), [7, 8]);
        assert_eq!(decoder.image_id(), b"abc");
    }

    #[test]
    fn truncated_raw_payload() {
        let mut file = header(2, 2, 2, 24, 0x20);
        file.extend_from_slice(&[0; 10]);

        let err = TgaDecoder::new(ZCursor::new(&file)).decode().unwrap_err();
        assert!(matches!(err, TgaDecodeErrors::TruncatedPayload(12, 10)));
    }

    #[test]
    fn truncated_header() {
        let err = TgaDecoder::new(ZCursor::new(&[0_u8; 10])).decode_headers().unwrap_err();
        assert!(matches!(err, TgaDecodeErrors::TruncatedHeader(10)));
    }

    #[test]
    fn small_output_is_rejected() {
        let mut file = header(3, 2, 2, 8, 0x20);
        file.extend_from_slice(&[0; 4]);

        let mut out = [0; 3];
        let err = TgaDecoder::new(ZCursor::new(&file)).decode_into(&mut out).unwrap_err();
        assert!(matches!(err, TgaDecodeErrors::TooSmallOutput(4, 3)));
    }

    #[test]
    fn probe() {
        let file = header(10, 4, 4, 32, 0);
        assert!(probe_tga(&file));
        assert!(!probe_tga(&file[..17]));
        assert!(!probe_tga(&header(1, 4, 4, 8, 0)));
        assert!(!probe_tga(&header(2, 4, 4, 15, 0)));
    }
}
