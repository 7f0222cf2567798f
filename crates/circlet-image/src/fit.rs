// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Center square cropping — fits an image to `min(width, height)` on both
// axes, trimming the longer axis symmetrically.

use image::RgbaImage;
use image::imageops;
use tracing::debug;

/// Crop `img` to a centered square of side `min(width, height)`.
///
/// The excess on the longer axis is split evenly between both ends; an odd
/// excess leaves the extra pixel on the trailing end.
pub fn square_crop(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    if width == height {
        return img.clone();
    }

    let size = width.min(height);
    let x = (width - size) / 2;
    let y = (height - size) / 2;
    debug!(width, height, size, x, y, "Center-cropping to square");

    imageops::crop_imm(img, x, y, size, size).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn square_input_is_unchanged() {
        let img = RgbaImage::from_pixel(40, 40, Rgba([10, 20, 30, 255]));
        let out = square_crop(&img);
        assert_eq!(out.dimensions(), (40, 40));
        assert_eq!(out, img);
    }

    #[test]
    fn wide_input_trims_both_sides() {
        // Mark the pixel that should land at the output's top-left corner.
        let mut img = RgbaImage::from_pixel(100, 40, Rgba([0, 0, 0, 255]));
        img.put_pixel(30, 0, Rgba([255, 0, 0, 255]));
        let out = square_crop(&img);
        assert_eq!(out.dimensions(), (40, 40));
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn tall_input_trims_both_ends() {
        let mut img = RgbaImage::from_pixel(40, 100, Rgba([0, 0, 0, 255]));
        img.put_pixel(0, 30, Rgba([0, 255, 0, 255]));
        let out = square_crop(&img);
        assert_eq!(out.dimensions(), (40, 40));
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn odd_excess_keeps_leading_offset_floor() {
        // 5x4: excess of 1 trims nothing on the left, one column on the right.
        let mut img = RgbaImage::from_pixel(5, 4, Rgba([0, 0, 0, 255]));
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        let out = square_crop(&img);
        assert_eq!(out.dimensions(), (4, 4));
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    }
}
