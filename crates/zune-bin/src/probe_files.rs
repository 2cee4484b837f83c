/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufReader;

use clap::ArgMatches;
use log::{error, warn};
use zune_core::options::DecoderOptions;
use zune_tga::TgaDecoder;

use crate::serde::Metadata;

/// Probe input files, extract header information, and print to standard output.
///
/// Returns true if probing was requested
pub fn probe_input_files(args: &ArgMatches) -> bool {
    if !args.get_flag("probe") {
        return false;
    }
    let Some(files) = args.get_raw("in") else {
        return true;
    };

    for in_file in files {
        let file = match File::open(in_file) {
            Ok(file) => file,
            Err(e) => {
                error!("Could not open {:?}: {e}", in_file);
                continue;
            }
        };
        let size = file.metadata().map(|m| m.len()).unwrap_or(0);

        // We'll just be reading headers so limits do not matter
        let mut decoder = TgaDecoder::new_with_options(BufReader::new(file), DecoderOptions::new_cmd());

        if let Err(e) = decoder.decode_headers() {
            warn!("{:?} is not a TGA image we can read: {:?}", in_file, e);
            continue;
        }
        let Some(header) = decoder.header() else {
            continue;
        };
        let metadata = Metadata::new(
            in_file.to_os_string(),
            size,
            header,
            decoder.colorspace(),
            decoder.image_id()
        );

        match serde_json::to_string_pretty(&metadata) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Could not serialize metadata: {e}")
        }
    }
    true
}
