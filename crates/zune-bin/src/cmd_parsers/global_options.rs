/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use zune_core::options::DecoderOptions;

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub decoder: DecoderOptions,
    pub rle:     bool,
    pub vflip:   bool,
    pub flip_h:  bool,
    pub flip_v:  bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            decoder: DecoderOptions::default(),
            rle:     true,
            vflip:   false,
            flip_h:  false,
            flip_v:  false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.decoder = get_decoder_options(options);

    if options.get_flag("no-rle") {
        info!("Writing uncompressed output");
        cmd_options.rle = false;
    }
    if options.get_flag("bottom-left") {
        info!("Writing bottom-left origin");
        cmd_options.vflip = true;
    }
    cmd_options.flip_h = options.get_flag("flip-h");
    cmd_options.flip_v = options.get_flag("flip-v");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
