/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Size of the fixed header that starts every TGA file
pub const TGA_HEADER_SIZE: usize = 18;

/// Size of the footer appended by the encoder
pub const TGA_FOOTER_SIZE: usize = 26;

/// Developer area offset, extension area offset and the signature,
/// written as is at the end of every encoded image.
pub const TGA_FOOTER: [u8; TGA_FOOTER_SIZE] = [
    0, 0, 0, 0, // developer area
    0, 0, 0, 0, // extension area
    b'T', b'R', b'U', b'E', b'V', b'I', b'S', b'I', b'O', b'N', b'-', b'X', b'F', b'I', b'L', b'E',
    b'.', 0
];

pub const TGA_TYPE_RGB: u8 = 2;
pub const TGA_TYPE_GRAY: u8 = 3;
pub const TGA_TYPE_RLE_RGB: u8 = 10;
pub const TGA_TYPE_RLE_GRAY: u8 = 11;

/// Descriptor bit set when pixels start from the right edge
pub const TGA_DESCRIPTOR_RIGHT_ORIGIN: u8 = 0x10;
/// Descriptor bit set when pixels start from the top edge
pub const TGA_DESCRIPTOR_TOP_ORIGIN: u8 = 0x20;

/// Maximum number of pixels a single packet can carry
pub const TGA_MAX_PACKET_PIXELS: usize = 128;

/// Control bytes at or above this describe run packets
pub const TGA_RUN_PACKET_FLAG: u8 = 0x80;
