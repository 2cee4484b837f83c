/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bit_depth::BitDepth;
use crate::colorspace::ColorSpace;

/// Encoder options that are flags
#[derive(Copy, Debug, Clone, Default)]
struct EncoderFlags {
    /// Whether the tga encoder should compress pixels with run length encoding
    tga_rle:   bool,
    /// Whether the tga encoder should mark the image as starting from the bottom left
    tga_vflip: bool
}

/// Options shared by some of the encoders in
/// the `zune-` family of image crates
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    depth:      BitDepth,
    flags:      EncoderFlags
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:      0,
            height:     0,
            colorspace: ColorSpace::RGB,
            depth:      BitDepth::Eight,
            flags:      EncoderFlags {
                tga_rle:   true,
                tga_vflip: false
            }
        }
    }
}

impl EncoderOptions {
    /// Create  new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `colorspace`:  Image colorspaces
    /// * `depth`: Image depth
    ///
    /// returns: EncoderOptions
    ///
    pub fn new(
        width: usize, height: usize, colorspace: ColorSpace, depth: BitDepth
    ) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            colorspace,
            depth,
            ..Default::default()
        }
    }
    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Get the depth for which the image will be encoded in
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }
    /// Get the colorspace for which the image will be encoded in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }
}

/// TGA specific options
impl EncoderOptions {
    /// Whether the tga encoder should compress pixels using
    /// run length encoding
    ///
    /// - Default value: true
    pub const fn tga_get_rle(&self) -> bool {
        self.flags.tga_rle
    }
    /// Set whether the tga encoder should use run length encoding
    /// or store pixels as they are
    pub fn tga_set_rle(mut self, yes: bool) -> Self {
        self.flags.tga_rle = yes;
        self
    }
    /// Whether the tga encoder marks the image origin as bottom left
    ///
    /// Pixels are written in the order they are given, this only changes
    /// what the header says about them, so a reader will flip them vertically.
    ///
    /// - Default value: false (top left origin)
    pub const fn tga_get_vflip(&self) -> bool {
        self.flags.tga_vflip
    }
    /// Set whether the tga encoder should mark the image as starting from the bottom
    /// left corner
    pub fn tga_set_vflip(mut self, yes: bool) -> Self {
        self.flags.tga_vflip = yes;
        self
    }
}
