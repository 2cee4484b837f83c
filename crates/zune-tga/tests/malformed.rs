/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{self, ErrorKind, Read};

use zune_core::bytestream::ZCursor;
use zune_tga::{TgaDecodeErrors, TgaDecoder, TgaErrorKind, TgaImage};

/// A reader that serves `data` and fails once `fail_at` bytes were read
struct FailingReader {
    data:    Vec<u8>,
    pos:     usize,
    fail_at: usize
}

impl FailingReader {
    fn new(data: Vec<u8>, fail_at: usize) -> FailingReader {
        FailingReader { data, pos: 0, fail_at }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.fail_at {
            return Err(io::Error::new(ErrorKind::Other, "device went away"));
        }
        let end = self.data.len().min(self.fail_at).min(self.pos + buf.len());
        let n = end - self.pos;
        buf[..n].copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(n)
    }
}

fn header(image_type: u8, width: u16, height: u16, bpp: u8) -> Vec<u8> {
    let mut header = vec![0_u8; 18];
    header[2] = image_type;
    header[12..14].copy_from_slice(&width.to_le_bytes());
    header[14..16].copy_from_slice(&height.to_le_bytes());
    header[16] = bpp;
    header[17] = 0x20;
    header
}

fn load_err(file: &[u8]) -> TgaErrorKind {
    TgaImage::load(ZCursor::new(file)).unwrap_err().kind()
}

#[test]
fn empty_source() {
    assert_eq!(load_err(&[]), TgaErrorKind::HeaderError);
}

#[test]
fn zero_dimensions() {
    assert_eq!(load_err(&header(2, 0, 1, 24)), TgaErrorKind::HeaderError);
    assert_eq!(load_err(&header(2, 1, 0, 24)), TgaErrorKind::HeaderError);
}

#[test]
fn unsupported_types() {
    for code in [0, 1, 9, 32, 33] {
        assert_eq!(load_err(&header(code, 1, 1, 8)), TgaErrorKind::UnsupportedTypeCode);
    }
    assert_eq!(load_err(&header(2, 1, 1, 16)), TgaErrorKind::HeaderError);
}

#[test]
fn truncated_payloads() {
    let mut file = header(2, 4, 4, 32);
    file.extend_from_slice(&[0; 63]);
    assert_eq!(load_err(&file), TgaErrorKind::TruncatedPayload);

    // run of 4 then nothing
    let mut file = header(10, 4, 4, 32);
    file.extend_from_slice(&[131, 1, 2, 3, 4]);
    assert_eq!(load_err(&file), TgaErrorKind::TruncatedPayload);
}

#[test]
fn run_past_the_end() {
    let mut file = header(11, 2, 2, 8);
    file.extend_from_slice(&[130, 5, 129, 6]);
    assert_eq!(load_err(&file), TgaErrorKind::Overrun);
}

#[test]
fn raw_packet_past_the_end() {
    let mut file = header(11, 2, 1, 8);
    file.extend_from_slice(&[2, 1, 2, 3]);
    assert_eq!(load_err(&file), TgaErrorKind::Overrun);
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut file = header(3, 1, 1, 8);
    file.extend_from_slice(&[42, 1, 2, 3, 4, 5]);

    let mut decoder = TgaDecoder::new(ZCursor::new(&file));
    assert_eq!(decoder.decode().unwrap(), [42]);
}

#[test]
fn failing_source_before_header() {
    let file = header(2, 2, 2, 8);
    let err = TgaImage::load(FailingReader::new(file, 0)).unwrap_err();

    assert!(matches!(err, TgaDecodeErrors::IoErrors(_)), "{err:?}");
    assert_eq!(err.kind(), TgaErrorKind::SourceUnavailable);
}

#[test]
fn failing_source_mid_payload() {
    // raw, fails after two of four pixels
    let mut file = header(3, 2, 2, 8);
    file.extend_from_slice(&[1, 2, 3, 4]);
    let err = TgaImage::load(FailingReader::new(file, 20)).unwrap_err();
    assert_eq!(err.kind(), TgaErrorKind::SourceUnavailable);

    // run length, fails after the first packet
    let mut file = header(11, 2, 2, 8);
    file.extend_from_slice(&[129, 5, 129, 6]);
    let err = TgaImage::load(FailingReader::new(file, 20)).unwrap_err();
    assert_eq!(err.kind(), TgaErrorKind::SourceUnavailable);
}

#[test]
fn truncated_payload_through_std_reader() {
    let mut file = header(2, 2, 2, 24);
    file.extend_from_slice(&[0; 10]);
    let err = TgaImage::load(&file[..]).unwrap_err();
    assert!(matches!(err, TgaDecodeErrors::TruncatedPayload(12, 10)), "{err:?}");

    // run of two, then a raw packet missing its second pixel
    let mut file = header(11, 2, 2, 8);
    file.extend_from_slice(&[129, 5, 1, 6]);
    let err = TgaImage::load(&file[..]).unwrap_err();
    assert_eq!(err.kind(), TgaErrorKind::TruncatedPayload);
}
