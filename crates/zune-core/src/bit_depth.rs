/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth information

/// The image bit depth.
///
/// Describes how many bits a single sample of a pixel
/// occupies, formats that only deal with byte samples
/// will report and accept [`BitDepth::Eight`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Images with such bit depth use [`u8`] to store
    /// pixels and use the whole range from 0-255.
    Eight,
    /// Sixteen bit depth
    ///
    /// Images with such bit depths use [`u16`] to store values and use the whole range
    /// i.e 0-65535
    Sixteen,
    /// Floating point samples, usually normalized between 0.0 and 1.0
    Float32,
    /// Bit depth information is unknown
    Unknown
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::Unknown
    }
}
