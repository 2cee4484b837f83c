/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zune_core::colorspace::ColorSpace;
use zune_tga::TgaHeader;

/// Header information of a single file as printed by `--probe`
pub struct Metadata<'a> {
    file:       OsString,
    size:       u64,
    header:     &'a TgaHeader,
    colorspace: Option<ColorSpace>,
    image_id:   &'a [u8]
}

impl<'a> Metadata<'a> {
    pub fn new(
        file: OsString, size: u64, header: &'a TgaHeader, colorspace: Option<ColorSpace>,
        image_id: &'a [u8]
    ) -> Metadata<'a> {
        Metadata {
            file,
            size,
            header,
            colorspace,
            image_id
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let header = self.header;
        let mut state = serializer.serialize_struct("TgaMetadata", 11)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.size)?;
        state.serialize_field("width", &header.width)?;
        state.serialize_field("height", &header.height)?;
        state.serialize_field("image_type", &header.image_type)?;
        state.serialize_field("rle", &header.kind().map(|x| x.is_rle()))?;
        state.serialize_field("bits_per_pixel", &header.bits_per_pixel)?;
        state.serialize_field("colorspace", &self.colorspace)?;
        state.serialize_field("top_origin", &header.is_top_origin())?;
        state.serialize_field("right_origin", &header.is_right_origin())?;
        state.serialize_field("image_id", &String::from_utf8_lossy(self.image_id))?;

        state.end()
    }
}
