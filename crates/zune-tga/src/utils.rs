/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In place orientation fixes on interleaved pixels

/// Reflect rows around the central x-axis
///
///```text
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
///```
/// `stride` is the number of bytes in a row.
pub fn flip_vertical(pixels: &mut [u8], stride: usize) {
    if stride == 0 {
        return;
    }
    let len = pixels.len();
    let (top, bottom) = pixels.split_at_mut((len / stride / 2) * stride);

    for (t, b) in top
        .chunks_exact_mut(stride)
        .zip(bottom.rchunks_exact_mut(stride))
    {
        t.swap_with_slice(b);
    }
}

/// Reflect pixels around the central y-axis
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
/// Pixels move as a whole, their channels keep their order.
pub fn flip_horizontal(pixels: &mut [u8], width: usize, channels: usize) {
    let stride = width * channels;

    if stride == 0 {
        return;
    }
    for row in pixels.chunks_exact_mut(stride) {
        let (left, right) = row.split_at_mut((width / 2) * channels);

        for (l, r) in left
            .chunks_exact_mut(channels)
            .zip(right.rchunks_exact_mut(channels))
        {
            l.swap_with_slice(r);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::{flip_horizontal, flip_vertical};

    #[test]
    fn vertical_odd_rows() {
        let mut pixels = [1, 1, 2, 2, 3, 3];
        flip_vertical(&mut pixels, 2);
        assert_eq!(pixels, [3, 3, 2, 2, 1, 1]);
    }

    #[test]
    fn horizontal_keeps_channel_order() {
        let mut pixels = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        flip_horizontal(&mut pixels, 3, 3);
        assert_eq!(pixels, [7, 8, 9, 4, 5, 6, 1, 2, 3]);

        let mut two_rows = [1, 2, 3, 4];
        flip_horizontal(&mut two_rows, 2, 1);
        assert_eq!(two_rows, [2, 1, 4, 3]);
    }
}
