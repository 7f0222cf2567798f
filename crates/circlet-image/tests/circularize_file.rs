// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end tests for the file-to-file pipeline: decode, trim, square,
// circular mask, PNG output.

use circlet_core::CircletError;
use circlet_image::circularize_file;
use image::{Rgba, RgbaImage};

/// 100x100 solid black with a white 40x40 square at (30,30)-(70,70).
fn black_with_white_square() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
    for y in 30..70 {
        for x in 30..70 {
            img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }
    img
}

#[test]
fn trims_squares_and_masks_to_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("logo.png");
    let output = dir.path().join("logo_round.png");

    black_with_white_square().save(&input).expect("write input");
    circularize_file(&input, &output).expect("pipeline");

    let out = image::open(&output).expect("reopen output").to_rgba8();

    // The white square is the detected foreground, so the output is 40x40.
    assert_eq!(out.dimensions(), (40, 40));

    // Corners outside the inscribed circle are fully transparent; the center
    // keeps the white foreground at full opacity.
    assert_eq!(out.get_pixel(0, 0).0[3], 0);
    assert_eq!(out.get_pixel(39, 0).0[3], 0);
    assert_eq!(out.get_pixel(0, 39).0[3], 0);
    assert_eq!(out.get_pixel(39, 39).0[3], 0);
    assert_eq!(*out.get_pixel(20, 20), Rgba([255, 255, 255, 255]));

    // Binary mask: no anti-aliased edge.
    assert!(out.pixels().all(|p| p.0[3] == 0 || p.0[3] == 255));
}

#[test]
fn rerunning_produces_identical_bytes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("logo.png");
    let output = dir.path().join("logo_round.png");

    black_with_white_square().save(&input).expect("write input");

    circularize_file(&input, &output).expect("first run");
    let first = std::fs::read(&output).expect("read first");

    circularize_file(&input, &output).expect("second run");
    let second = std::fs::read(&output).expect("read second");

    assert_eq!(first, second);
}

#[test]
fn gradient_background_skips_trim() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("gradient.png");
    let output = dir.path().join("gradient_round.png");

    // Shallow gradient: no pixel differs from (0,0) by more than 50, so the
    // trim is skipped and the 80x50 input center-crops to 50x50.
    let img = RgbaImage::from_fn(80, 50, |x, _| {
        let v = (x / 2) as u8;
        Rgba([v, v, v, 255])
    });
    img.save(&input).expect("write input");

    circularize_file(&input, &output).expect("pipeline");
    let out = image::open(&output).expect("reopen output").to_rgba8();
    assert_eq!(out.dimensions(), (50, 50));
}

#[test]
fn missing_input_is_a_decode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = circularize_file(dir.path().join("absent.png"), dir.path().join("out.png"));
    assert!(matches!(result, Err(CircletError::Decode(_))));
}

#[test]
fn unwritable_output_is_an_encode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("logo.png");
    black_with_white_square().save(&input).expect("write input");

    let result = circularize_file(&input, dir.path().join("no-such-dir").join("out.png"));
    assert!(matches!(result, Err(CircletError::Encode(_))));
}
