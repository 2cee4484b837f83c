/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use log::info;
use zune_core::options::DecoderOptions;
use zune_tga::TgaImage;

use crate::workflow::WorkflowErrors;

pub fn read_image(file_path: &OsStr, options: DecoderOptions) -> Result<TgaImage, WorkflowErrors> {
    info!("Reading {:?}", file_path);
    let fd = BufReader::new(File::open(file_path)?);

    Ok(TgaImage::load_with_options(fd, options)?)
}

pub fn write_image(
    file_path: &OsStr, image: &TgaImage, vflip: bool, rle: bool
) -> Result<usize, WorkflowErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(file_path)?;

    let bytes = image.save(BufWriter::new(file), vflip, rle)?;
    info!("Wrote {bytes} bytes to {:?}", file_path);

    Ok(bytes)
}
