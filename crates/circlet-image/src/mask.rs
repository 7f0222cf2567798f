// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Circular alpha masking — builds a hard-edged inscribed circle mask and
// substitutes it into an image's alpha channel.

use image::{GrayImage, Luma, RgbaImage};
use imageproc::drawing::draw_filled_ellipse_mut;
use tracing::debug;

/// Build a `size` x `size` single-channel mask: 0 everywhere except a filled
/// ellipse inscribed in the full square (a circle touching all four edges),
/// value 255. The edge is binary — no anti-aliasing.
pub fn circular_mask(size: u32) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    let radius = (size / 2) as i32;
    draw_filled_ellipse_mut(&mut mask, (radius, radius), radius, radius, Luma([255u8]));
    debug!(size, "Circular mask built");
    mask
}

/// Replace `img`'s alpha channel with `mask`'s values. Direct substitution,
/// not blending: RGB is untouched, pixels outside the circle become fully
/// transparent.
///
/// `img` and `mask` must share dimensions.
pub fn apply_alpha(mut img: RgbaImage, mask: &GrayImage) -> RgbaImage {
    debug_assert_eq!(img.dimensions(), mask.dimensions());

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        pixel.0[3] = mask.get_pixel(x, y).0[0];
    }
    img
}
