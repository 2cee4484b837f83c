/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for channels in [1, 3, 4] {
        let len = data.len() - data.len() % channels;
        let pixels = &data[..len];

        let encoded = zune_tga::rle::encode(pixels, channels).unwrap();
        let decoded = zune_tga::rle::decode(&encoded, len / channels, 1, channels).unwrap();
        assert_eq!(decoded, pixels);
    }
});
