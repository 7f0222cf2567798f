// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Uniform-border detection — samples the background colour from the top-left
// pixel, computes an amplified per-channel difference image, and finds the
// bounding box of everything that survives the threshold.

use image::{Rgba, RgbaImage};
use imageproc::rect::Rect;
use tracing::{debug, instrument};

/// Gain applied to the raw per-channel difference before thresholding.
const DIFF_GAIN: i32 = 2;

/// Subtracted from the amplified difference; raw differences of 50 or less
/// per channel vanish entirely.
const DIFF_BIAS: i32 = 100;

/// The assumed background colour: the pixel at (0, 0).
pub fn background_sample(img: &RgbaImage) -> Rgba<u8> {
    *img.get_pixel(0, 0)
}

/// Per-channel absolute difference between `img` and a uniform image of
/// `background`, amplified as `clamp(d * 2 - 100, 0, 255)`.
///
/// The amplification suppresses low-amplitude noise (compression artifacts,
/// near-background fringe pixels) and saturates genuine foreground toward the
/// maximum, so the subsequent bounding-box scan only has to test for nonzero.
pub fn background_difference(img: &RgbaImage, background: Rgba<u8>) -> RgbaImage {
    let Rgba(bg) = background;
    let amplify = |channel: u8, reference: u8| -> u8 {
        let d = (channel as i32 - reference as i32).abs();
        (d * DIFF_GAIN - DIFF_BIAS).clamp(0, 255) as u8
    };

    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgba(p) = *img.get_pixel(x, y);
        Rgba([
            amplify(p[0], bg[0]),
            amplify(p[1], bg[1]),
            amplify(p[2], bg[2]),
            amplify(p[3], bg[3]),
        ])
    })
}

/// Smallest rectangle enclosing every pixel of `diff` with any nonzero
/// channel, or `None` when the image is entirely zero.
pub fn content_bounds(diff: &RgbaImage) -> Option<Rect> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in diff.enumerate_pixels() {
        if pixel.0.iter().any(|&c| c > 0) {
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((left, top, right, bottom)) => {
                    (left.min(x), top.min(y), right.max(x), bottom.max(y))
                }
            });
        }
    }

    bounds.map(|(left, top, right, bottom)| {
        Rect::at(left as i32, top as i32).of_size(right - left + 1, bottom - top + 1)
    })
}

/// Locate the foreground of `img` relative to the background colour sampled
/// at (0, 0). Returns `None` when no pixel differs from the background by
/// more than the threshold — e.g. gradients or uniform images.
#[instrument(skip_all, fields(width = img.width(), height = img.height()))]
pub fn find_content(img: &RgbaImage) -> Option<Rect> {
    let background = background_sample(img);
    let diff = background_difference(img, background);
    let bounds = content_bounds(&diff);
    debug!(?bounds, "Content bounds computed");
    bounds
}
