/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use zune_tga::zune_core::bytestream::ZCursor;

fuzz_target!(|data: &[u8]| {
    let mut decoder = zune_tga::TgaDecoder::new(ZCursor::new(data));
    let _ = decoder.decode();
});
