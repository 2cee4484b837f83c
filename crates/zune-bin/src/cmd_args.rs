/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zune-tga")
        .about("Decode, transform and encode TGA images")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .action(ArgAction::Append)
            .required_unless_present("probe"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the header of input files as json and exit"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("flip-h")
            .long("flip-h")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Mirror the image around the vertical axis"))
        .arg(Arg::new("flip-v")
            .long("flip-v")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Mirror the image around the horizontal axis"))
        .arg(Arg::new("rle")
            .long("rle")
            .action(ArgAction::SetTrue)
            .help_heading("ENCODING")
            .conflicts_with("no-rle")
            .help("Run length encode the output (default)"))
        .arg(Arg::new("no-rle")
            .long("no-rle")
            .action(ArgAction::SetTrue)
            .help_heading("ENCODING")
            .help("Write uncompressed pixels"))
        .arg(Arg::new("bottom-left")
            .long("bottom-left")
            .action(ArgAction::SetTrue)
            .help_heading("ENCODING")
            .help("Mark the output as having a bottom-left origin")
            .long_help("Mark the output as having a bottom-left origin.\nPixels are written as they are, readers that honour the origin will show the image upside down."))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject images with a color map instead of ignoring it"))
}
