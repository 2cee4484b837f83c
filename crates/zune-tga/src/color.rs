/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// A single pixel value
///
/// Channels are stored in file order, B,G,R,A. `channels`
/// says how many of the four slots carry meaning, the rest are zero.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TgaColor {
    bgra:     [u8; 4],
    channels: u8
}

impl TgaColor {
    /// A color with no channels, returned for pixels that do not exist
    pub const fn zero() -> TgaColor {
        TgaColor {
            bgra:     [0; 4],
            channels: 0
        }
    }
    /// Create a color from raw pixel bytes
    ///
    /// At most four bytes are kept
    pub fn from_slice(bytes: &[u8]) -> TgaColor {
        let channels = bytes.len().min(4);
        let mut bgra = [0; 4];

        bgra[..channels].copy_from_slice(&bytes[..channels]);

        TgaColor {
            bgra,
            channels: channels as u8
        }
    }
    pub const fn gray(value: u8) -> TgaColor {
        TgaColor {
            bgra:     [value, 0, 0, 0],
            channels: 1
        }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> TgaColor {
        TgaColor {
            bgra:     [b, g, r, 0],
            channels: 3
        }
    }
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> TgaColor {
        TgaColor {
            bgra:     [b, g, r, a],
            channels: 4
        }
    }
    /// Number of meaningful channels
    pub const fn channels(&self) -> usize {
        self.channels as usize
    }
    /// Channel `index` in B,G,R,A order, 0 when out of range
    pub const fn channel(&self, index: usize) -> u8 {
        if index < self.channels as usize {
            self.bgra[index]
        } else {
            0
        }
    }
    /// The meaningful channels
    pub fn as_slice(&self) -> &[u8] {
        &self.bgra[..self.channels()]
    }
    /// All four slots, unused ones are zero
    pub const fn bgra(&self) -> [u8; 4] {
        self.bgra
    }
    pub const fn is_zero(&self) -> bool {
        self.channels == 0
    }
}

#[cfg(test)]
mod tests {
    use crate::color::TgaColor;

    #[test]
    fn unused_slots_read_zero() {
        let color = TgaColor::from_rgb(30, 20, 10);

        assert_eq!(color.as_slice(), [10, 20, 30]);
        assert_eq!(color.channel(3), 0);
        assert_eq!(color.channel(100), 0);
        assert_eq!(TgaColor::from_slice(&[1, 2, 3, 4, 5]).channels(), 4);
        assert!(TgaColor::zero().is_zero());
        assert_eq!(TgaColor::zero(), TgaColor::default());
    }
}
