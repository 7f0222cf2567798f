// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Circularizer pipeline — decode, trim uniform borders, center-crop to a
// square, mask into a circle, encode as PNG. Operates on in-memory RGBA
// images using the `image` and `imageproc` crates.

use circlet_core::error::CircletError;
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::{debug, info, instrument};

use crate::fit::square_crop;
use crate::mask::{apply_alpha, circular_mask};
use crate::trim::find_content;

/// Image transformation pipeline operating on a single in-memory image.
///
/// All operations are non-destructive: each method consumes `self` and returns
/// a new `Circularizer` wrapping the transformed image, enabling method
/// chaining.
///
/// ```ignore
/// Circularizer::open("logo.jpg")?
///     .trim_background()
///     .square()
///     .circularize()
///     .save_png("logo_round.png")?;
/// ```
pub struct Circularizer {
    /// The current working image, always 4-channel RGBA.
    image: RgbaImage,
}

impl Circularizer {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path, upconverting to RGBA. Sources without
    /// an alpha channel become fully opaque.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, CircletError> {
        let img = image::open(path.as_ref()).map_err(|err| {
            CircletError::Decode(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!(
            width = img.width(),
            height = img.height(),
            "Image loaded"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Create a pipeline from raw encoded bytes (JPEG, PNG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, CircletError> {
        let img = image::load_from_memory(data)
            .map_err(|err| CircletError::Decode(format!("failed to decode image: {}", err)))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Wrap an already-decoded `DynamicImage`, upconverting to RGBA.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgba8(),
        }
    }

    /// Wrap an RGBA buffer directly.
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying RGBA buffer.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the pipeline and return the underlying RGBA buffer.
    pub fn into_rgba(self) -> RgbaImage {
        self.image
    }

    // -- Transformations (consume self, return new Self) ----------------------

    /// Trim uniform borders matching the background colour sampled at (0, 0).
    ///
    /// When no pixel differs from the background by more than the detection
    /// threshold — a gradient background, or a uniform image — the image is
    /// carried forward unchanged.
    #[instrument(skip(self))]
    pub fn trim_background(self) -> Self {
        let Some(bounds) = find_content(&self.image) else {
            info!("No foreground detected; skipping border trim");
            return self;
        };

        info!(
            left = bounds.left(),
            top = bounds.top(),
            width = bounds.width(),
            height = bounds.height(),
            "Trimming to content bounds"
        );
        let cropped = image::imageops::crop_imm(
            &self.image,
            bounds.left() as u32,
            bounds.top() as u32,
            bounds.width(),
            bounds.height(),
        )
        .to_image();
        Self { image: cropped }
    }

    /// Center-crop to a square of side `min(width, height)`.
    #[instrument(skip(self))]
    pub fn square(self) -> Self {
        Self {
            image: square_crop(&self.image),
        }
    }

    /// Replace the alpha channel with an inscribed-circle mask, making the
    /// corners fully transparent.
    ///
    /// Re-crops to a square first in case the caller skipped [`square`];
    /// on an already-square image that is a no-op.
    ///
    /// [`square`]: Circularizer::square
    #[instrument(skip(self))]
    pub fn circularize(self) -> Self {
        let squared = square_crop(&self.image);
        let size = squared.width();
        let mask = circular_mask(size);
        info!(size, "Applying circular mask");
        Self {
            image: apply_alpha(squared, &mask),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, CircletError> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|err| CircletError::Encode(format!("PNG encoding failed: {}", err)))?;
        Ok(buffer)
    }

    /// Write the image to a file as PNG, regardless of the path's extension.
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), CircletError> {
        self.image
            .save_with_format(path.as_ref(), ImageFormat::Png)
            .map_err(|err| {
                CircletError::Encode(format!(
                    "failed to save image to {}: {}",
                    path.as_ref().display(),
                    err
                ))
            })
    }
}

/// Run the full pipeline file-to-file: decode `input`, trim uniform borders,
/// center-crop to a square, mask into a circle, and write a PNG to `output`.
#[instrument(skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub fn circularize_file(
    input: impl AsRef<std::path::Path>,
    output: impl AsRef<std::path::Path>,
) -> Result<(), CircletError> {
    Circularizer::open(input)?
        .trim_background()
        .square()
        .circularize()
        .save_png(output)
}
