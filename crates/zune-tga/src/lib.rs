/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding Truevision TGA images
//!
//! # Supported images
//! - Uncompressed and run length encoded truecolor images (types 2 and 10),
//!   24 and 32 bits per pixel
//! - Uncompressed and run length encoded grayscale images (types 3 and 11),
//!   8 bits per pixel
//!
//! Palette images, 15/16 bit images and the extension area are not supported.
//!
//! Pixels are handed out in the order TGA stores them, that is B,G,R(,A),
//! top row first regardless of the origin declared in the file.
//!
//! # Features
//! - Decoding and encoding
//! - `no_std`
//! - Fuzz tested
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints
//!
//! # Example
//! ```
//! use zune_core::bytestream::ZCursor;
//! use zune_tga::{PixelFormat, TgaImage};
//!
//! let image = TgaImage::new(16, 16, PixelFormat::Rgba);
//! let mut file = vec![];
//! image.save(&mut file, false, true).unwrap();
//!
//! let decoded = TgaImage::load(ZCursor::new(&file)).unwrap();
//! assert_eq!(image, decoded);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use color::*;
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use header::*;
pub use image::*;
pub use zune_core;

mod color;
mod constants;
mod decoder;
mod encoder;
mod errors;
mod header;
mod image;
pub mod rle;
mod utils;

pub use constants::{TGA_FOOTER, TGA_FOOTER_SIZE, TGA_HEADER_SIZE};
