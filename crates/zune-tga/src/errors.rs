/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZByteIoError;
use zune_core::colorspace::ColorSpace;

/// Broad classification of what went wrong
///
/// Every decode and encode error maps to exactly one kind, callers
/// that only care about the category (e.g. to tell the user a palette image
/// is not supported) can match on this instead of the detailed error
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TgaErrorKind {
    /// The source could not be read
    SourceUnavailable,
    /// The sink could not be written to
    SinkUnavailable,
    /// The header is short or carries values we cannot decode
    HeaderError,
    /// The image type code is not one of the truecolor/grayscale codes,
    /// e.g palette images
    UnsupportedTypeCode,
    /// The pixel payload ended before the image was complete
    TruncatedPayload,
    /// The run length stream describes more pixels than the image has
    Overrun,
    /// Arguments given to the library do not describe a valid image
    InvalidInput
}

/// Possible Errors that may occur during decoding
pub enum TgaDecodeErrors {
    /// The source has less than the 18 bytes needed for a header
    ///
    /// The argument is the number of bytes found
    TruncatedHeader(usize),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// Bits per pixel is not 8, 24 or 32
    UnsupportedBitsPerPixel(u8),
    /// The image type is not raw/rle truecolor or grayscale
    UnsupportedTypeCode(u8),
    /// The image declares a color map, only rejected in strict mode
    UnsupportedColorMap(u8),
    /// Too large dimensions for a given width or
    /// height
    ///
    /// # Arguments
    /// - dimension name
    /// - configured maximum
    /// - value found in the header
    TooLargeDimensions(&'static str, usize, usize),
    /// The pixel payload ended before the image was complete
    ///
    /// # Arguments
    /// - 1st argument is the number of pixel bytes the image needs
    /// - 2nd argument is the number of pixel bytes recovered before
    ///   the source ran out
    TruncatedPayload(usize, usize),
    /// A run length packet would write past the end of the image
    ///
    /// # Arguments
    /// - 1st argument is the number of pixels in the image
    /// - 2nd argument is the pixel count the packet would have reached
    Overrun(usize, usize),
    /// To small output size
    TooSmallOutput(usize, usize),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str),
    IoErrors(ZByteIoError)
}

impl TgaDecodeErrors {
    /// Return the broad category of this error
    pub const fn kind(&self) -> TgaErrorKind {
        match self {
            Self::TruncatedHeader(_)
            | Self::ZeroDimensions(..)
            | Self::UnsupportedBitsPerPixel(_)
            | Self::UnsupportedColorMap(_)
            | Self::TooLargeDimensions(..) => TgaErrorKind::HeaderError,
            Self::UnsupportedTypeCode(_) => TgaErrorKind::UnsupportedTypeCode,
            Self::TruncatedPayload(..) => TgaErrorKind::TruncatedPayload,
            Self::Overrun(..) => TgaErrorKind::Overrun,
            Self::TooSmallOutput(..) | Self::GenericStatic(_) => TgaErrorKind::InvalidInput,
            Self::IoErrors(_) => TgaErrorKind::SourceUnavailable
        }
    }
}

impl Debug for TgaDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TruncatedHeader(found) => {
                writeln!(
                    f,
                    "Truncated header, expected 18 bytes but the source has {found}"
                )
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Invalid image dimensions {width}x{height}")
            }
            Self::UnsupportedBitsPerPixel(bpp) => {
                writeln!(
                    f,
                    "Unsupported bits per pixel {bpp}, expected one of 8, 24 or 32"
                )
            }
            Self::UnsupportedTypeCode(code) => {
                writeln!(
                    f,
                    "Unsupported image type {code}, only truecolor and grayscale (2, 3, 10, 11) images are supported"
                )
            }
            Self::UnsupportedColorMap(map_type) => {
                writeln!(f, "Unsupported color map type {map_type}, expected 0")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::TruncatedPayload(expected, found) => {
                writeln!(
                    f,
                    "Truncated pixel data, expected {expected} bytes but only {found} could be decoded"
                )
            }
            Self::Overrun(expected, found) => {
                writeln!(
                    f,
                    "Run length data overruns the image, image has {expected} pixels but packet reaches {found}"
                )
            }
            Self::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            Self::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            Self::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

/// Map a read failure inside the pixel payload to a decode error
///
/// Running out of bytes is a truncated image, anything else means the
/// source itself failed
pub(crate) fn payload_error(err: ZByteIoError, expected: usize, found: usize) -> TgaDecodeErrors {
    if err.is_exhausted() {
        TgaDecodeErrors::TruncatedPayload(expected, found)
    } else {
        TgaDecodeErrors::IoErrors(err)
    }
}

impl From<&'static str> for TgaDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

impl From<ZByteIoError> for TgaDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        TgaDecodeErrors::IoErrors(value)
    }
}

/// Errors encountered during encoding
pub enum TgaEncodeErrors {
    /// Unsupported colorspace
    ///
    /// The first argument is the colorspace encountered
    /// The second argument is list of supported colorspaces
    UnsupportedColorspace(ColorSpace, &'static [ColorSpace]),
    /// Only eight bit images can be encoded
    UnsupportedDepth(BitDepth),
    /// Too large dimensions
    /// The dimensions cannot be stored in the 16 bit header fields
    TooLargeDimensions(usize),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// The input size was expected to be of a certain size but isn't
    ///
    /// # Arguments
    /// - expected size
    /// - size found
    WrongInputSize(usize, usize),
    Generic(&'static str),
    IoError(ZByteIoError)
}

impl TgaEncodeErrors {
    /// Return the broad category of this error
    pub const fn kind(&self) -> TgaErrorKind {
        match self {
            Self::IoError(_) => TgaErrorKind::SinkUnavailable,
            _ => TgaErrorKind::InvalidInput
        }
    }
}

impl Debug for TgaEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedColorspace(found, supported) => {
                writeln!(f, "Cannot encode image with colorspace {found:?} into TGA, supported ones are {supported:?}")
            }
            Self::UnsupportedDepth(depth) => {
                writeln!(
                    f,
                    "Cannot encode image with depth {depth:?} into TGA, only eight bit images are supported"
                )
            }
            Self::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, TGA can only encode images less than {}",
                    u16::MAX
                )
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Cannot encode an image with dimensions {width}x{height}")
            }
            Self::WrongInputSize(expected, found) => {
                writeln!(f, "Input array length {found} doesn't match {expected}")
            }
            Self::Generic(val) => {
                writeln!(f, "{}", val)
            }
            Self::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for TgaEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}
impl Display for TgaDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TgaEncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for TgaDecodeErrors {}

impl From<ZByteIoError> for TgaEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::IoError(value)
    }
}
