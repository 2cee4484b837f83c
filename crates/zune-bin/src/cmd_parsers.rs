/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use zune_core::options::DecoderOptions;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = options.get_one::<usize>("max-width").copied();
    let max_height = options.get_one::<usize>("max-height").copied();
    let strict_mode = options.get_flag("strict");

    let defaults = DecoderOptions::default();

    DecoderOptions::new_cmd()
        .set_max_width(max_width.unwrap_or(defaults.get_max_width()))
        .set_max_height(max_height.unwrap_or(defaults.get_max_height()))
        .set_strict_mode(strict_mode)
}
