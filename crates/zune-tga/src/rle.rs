/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Run length packets
//!
//! A packet starts with a control byte `c`.
//! - `c < 128`: a raw packet, `c + 1` literal pixels follow
//! - `c >= 128`: a run packet, a single pixel follows and is repeated `c - 127` times
//!
//! Packets never cross the end of the image and carry at most 128 pixels.
use alloc::vec;
use alloc::vec::Vec;

use zune_core::bytestream::{ZByteReaderTrait, ZByteWriterTrait, ZCursor, ZReader, ZWriter};

use crate::constants::{TGA_MAX_PACKET_PIXELS, TGA_RUN_PACKET_FLAG};
use crate::errors::{payload_error, TgaDecodeErrors, TgaEncodeErrors};

/// Decode run length packets from `stream` until `pixels` is full
///
/// `pixels.len()` must be a multiple of `channels` and `channels` must be
/// between 1 and 4.
///
/// Raw packets are first read into a scratch buffer, so a packet cut short
/// by the end of the stream never leaves partial pixels in the output.
///
/// # Errors
/// - [`TgaDecodeErrors::TruncatedPayload`]: the stream ended mid image
/// - [`TgaDecodeErrors::Overrun`]: a packet describes more pixels than remain
pub fn decode_rle<T: ZByteReaderTrait>(
    stream: &mut ZReader<T>, pixels: &mut [u8], channels: usize
) -> Result<(), TgaDecodeErrors> {
    if channels == 0 || channels > 4 || pixels.len() % channels != 0 {
        return Err(TgaDecodeErrors::GenericStatic(
            "Output buffer does not hold whole pixels"
        ));
    }
    let expected_bytes = pixels.len();
    let total = pixels.len() / channels;

    let mut scratch = [0_u8; TGA_MAX_PACKET_PIXELS * 4];
    let mut produced = 0;

    while produced < total {
        let control = stream
            .get_u8_err()
            .map_err(|e| payload_error(e, expected_bytes, produced * channels))?;

        let is_run = (control & TGA_RUN_PACKET_FLAG) != 0;

        let count = if is_run {
            usize::from(control) - 127
        } else {
            usize::from(control) + 1
        };

        if produced + count > total {
            return Err(TgaDecodeErrors::Overrun(total, produced + count));
        }
        let start = produced * channels;
        let end = start + count * channels;

        if is_run {
            let mut px = [0_u8; 4];

            stream
                .read_exact_bytes(&mut px[..channels])
                .map_err(|e| payload_error(e, expected_bytes, start))?;

            for out in pixels[start..end].chunks_exact_mut(channels) {
                out.copy_from_slice(&px[..channels]);
            }
        } else {
            let staged = &mut scratch[..count * channels];

            stream
                .read_exact_bytes(staged)
                .map_err(|e| payload_error(e, expected_bytes, start))?;

            pixels[start..end].copy_from_slice(staged);
        }
        produced += count;
    }
    Ok(())
}

/// Encode `pixels` as run length packets into `writer`
///
/// Packets are chosen greedily in one pass: when a pixel equals the one after
/// it, a run packet covers every following equal pixel (up to 128), otherwise
/// a raw packet grows until the next two pixels are equal, it holds 128
/// pixels or the buffer ends.
///
/// Returns the number of pixels the packets describe.
///
/// # Errors
/// - [`TgaEncodeErrors::WrongInputSize`] if `pixels` ends with a partial pixel,
///   nothing is written in that case
/// - [`TgaEncodeErrors::IoError`] if the sink fails
pub fn encode_rle<T: ZByteWriterTrait>(
    pixels: &[u8], channels: usize, writer: &mut ZWriter<T>
) -> Result<usize, TgaEncodeErrors> {
    if channels == 0 || channels > 4 {
        return Err(TgaEncodeErrors::Generic("Pixels must have between 1 and 4 channels"));
    }
    if pixels.len() % channels != 0 {
        let whole = pixels.len() - pixels.len() % channels;
        return Err(TgaEncodeErrors::WrongInputSize(whole, pixels.len()));
    }
    let px = |i: usize| &pixels[i * channels..(i + 1) * channels];

    let total = pixels.len() / channels;
    let mut pos = 0;
    let mut emitted = 0;

    while pos < total {
        let mut run = 1;

        while run < TGA_MAX_PACKET_PIXELS && pos + run < total && px(pos + run) == px(pos) {
            run += 1;
        }

        if run >= 2 {
            writer.write_u8_err((run + 127) as u8)?;
            writer.write_all(px(pos))?;

            pos += run;
            emitted += run;
            continue;
        }

        let mut length = 1;

        while pos + length < total && length < TGA_MAX_PACKET_PIXELS {
            let next = pos + length;
            // an equal pair starts the next run packet
            if next + 1 < total && px(next) == px(next + 1) {
                break;
            }
            length += 1;
        }
        writer.write_u8_err((length - 1) as u8)?;
        writer.write_all(&pixels[pos * channels..(pos + length) * channels])?;

        pos += length;
        emitted += length;
    }
    Ok(emitted)
}

/// Encode `pixels` into a freshly allocated vector of packets
///
/// Fails under the same conditions as [`encode_rle`]
pub fn encode(pixels: &[u8], channels: usize) -> Result<Vec<u8>, TgaEncodeErrors> {
    let mut out = Vec::with_capacity(max_encoded_size(pixels.len(), channels));
    let mut writer = ZWriter::new(&mut out);

    encode_rle(pixels, channels, &mut writer)?;

    Ok(out)
}

/// Decode `width * height` pixels of `channels` bytes from `data`
pub fn decode(
    data: &[u8], width: usize, height: usize, channels: usize
) -> Result<Vec<u8>, TgaDecodeErrors> {
    let size = width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(channels))
        .ok_or(TgaDecodeErrors::GenericStatic("Image dimensions overflow"))?;

    let mut pixels = vec![0; size];
    let mut stream = ZReader::new(ZCursor::new(data));
    decode_rle(&mut stream, &mut pixels, channels)?;
    Ok(pixels)
}

/// Worst case size of the packets for `len` bytes of pixels,
/// every pixel a literal with a control byte per 128 pixels
pub const fn max_encoded_size(len: usize, channels: usize) -> usize {
    if channels == 0 {
        return 0;
    }
    let pixels = len / channels;
    len + pixels.div_ceil(TGA_MAX_PACKET_PIXELS)
}
