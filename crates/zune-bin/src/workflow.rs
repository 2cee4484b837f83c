/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use clap::ArgMatches;
use log::{debug, info};
use zune_tga::{TgaDecodeErrors, TgaEncodeErrors};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::{read_image, write_image};

pub enum WorkflowErrors {
    Io(std::io::Error),
    Decode(TgaDecodeErrors),
    Encode(TgaEncodeErrors),
    Generic(&'static str)
}

impl Debug for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => writeln!(f, "I/O error: {e}"),
            Self::Decode(e) => writeln!(f, "Decoding error ({:?}): {:?}", e.kind(), e),
            Self::Encode(e) => writeln!(f, "Encoding error ({:?}): {:?}", e.kind(), e),
            Self::Generic(e) => writeln!(f, "{e}")
        }
    }
}

impl From<std::io::Error> for WorkflowErrors {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<TgaDecodeErrors> for WorkflowErrors {
    fn from(value: TgaDecodeErrors) -> Self {
        Self::Decode(value)
    }
}

impl From<TgaEncodeErrors> for WorkflowErrors {
    fn from(value: TgaEncodeErrors) -> Self {
        Self::Encode(value)
    }
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), WorkflowErrors> {
    info!("Creating workflows from input");

    let (Some(inputs), Some(outputs)) = (args.get_raw("in"), args.get_raw("out")) else {
        return Err(WorkflowErrors::Generic("Both input and output files are needed"));
    };

    if inputs.len() != outputs.len() {
        return Err(WorkflowErrors::Generic(
            "Number of input files does not match number of output files"
        ));
    }

    for (in_file, out_file) in inputs.zip(outputs) {
        let mut image = read_image(in_file, cmd_opts.decoder)?;

        debug!(
            "Decoded {}x{} {:?} image",
            image.width(),
            image.height(),
            image.colorspace()
        );

        if cmd_opts.flip_h {
            info!("Flipping horizontally");
            image.flip_horizontally();
        }
        if cmd_opts.flip_v {
            info!("Flipping vertically");
            image.flip_vertically();
        }
        write_image(out_file, &image, cmd_opts.vflip, cmd_opts.rle)?;
    }
    Ok(())
}
