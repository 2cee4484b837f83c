/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use zune_core::bytestream::ZCursor;
use zune_core::options::DecoderOptions;
use zune_tga::{PixelFormat, TgaColor, TgaErrorKind, TgaImage, TGA_FOOTER, TGA_HEADER_SIZE};

fn random_image(rng: &mut nanorand::WyRand, width: u16, height: u16, format: PixelFormat) -> TgaImage {
    let len = usize::from(width) * usize::from(height) * format.channels();
    // few distinct values so both raw and run packets show up
    let data = (0..len).map(|_| rng.generate_range(0_u8..4)).collect();
    TgaImage::from_raw(width, height, format, data).unwrap()
}

#[test]
fn every_size_and_format_round_trips() {
    let mut rng = nanorand::WyRand::new_seed(42);

    for format in [PixelFormat::Grayscale, PixelFormat::Rgb, PixelFormat::Rgba] {
        for width in 1..=64 {
            for height in [1, 2, 7, 33, 64] {
                let image = random_image(&mut rng, width, height, format);

                for rle in [false, true] {
                    let mut file = vec![];
                    image.save(&mut file, false, rle).unwrap();

                    let decoded = TgaImage::load(ZCursor::new(&file)).unwrap();
                    assert_eq!(image, decoded, "{width}x{height} {format:?} rle={rle}");
                }
            }
        }
    }
}

#[test]
fn vflip_is_header_only() {
    let mut image = TgaImage::new(2, 2, PixelFormat::Grayscale);
    image.data_mut().copy_from_slice(&[1, 2, 3, 4]);

    let mut file = vec![];
    image.save(&mut file, true, false).unwrap();

    assert_eq!(file[17], 0x00);
    assert_eq!(&file[TGA_HEADER_SIZE..TGA_HEADER_SIZE + 4], &[1, 2, 3, 4]);
    assert_eq!(&file[file.len() - TGA_FOOTER.len()..], &TGA_FOOTER);

    // a bottom-left file is normalized on load
    let decoded = TgaImage::load(ZCursor::new(&file)).unwrap();
    assert_eq!(decoded.data(), [3, 4, 1, 2]);
}

#[test]
fn std_readers_and_writers() {
    let mut image = TgaImage::new(3, 3, PixelFormat::Rgb);
    image.set(1, 1, TgaColor::from_rgb(30, 20, 10));

    let mut file = std::io::Cursor::new(Vec::new());
    let written = image.save(&mut file, false, true).unwrap();
    let file = file.into_inner();

    assert_eq!(written, file.len());

    let decoded = TgaImage::load(std::io::Cursor::new(&file)).unwrap();
    assert_eq!(decoded.get(1, 1), TgaColor::from_rgb(30, 20, 10));
    assert_eq!(decoded, image);

    // plain slices are readers too
    let decoded = TgaImage::load(&file[..]).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn wide_images_load_without_limits() {
    let mut rng = nanorand::WyRand::new_seed(7);
    let image = random_image(&mut rng, 20000, 1, PixelFormat::Grayscale);

    for rle in [false, true] {
        let mut file = vec![];
        image.save(&mut file, false, rle).unwrap();

        let decoded = TgaImage::load(ZCursor::new(&file)).unwrap();
        assert_eq!(decoded.width(), 20000);
        assert_eq!(decoded, image, "rle={rle}");

        // limits are still available on request
        let err = TgaImage::load_with_options(ZCursor::new(&file), DecoderOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), TgaErrorKind::HeaderError);
    }
}
