// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// circlet-image — Image transformation for the Circlet cropper.
//
// Provides background trimming (uniform-border detection via amplified pixel
// difference), center square cropping, circular alpha masking, and the
// file-to-file pipeline that chains them.

pub mod fit;
pub mod mask;
pub mod pipeline;
pub mod trim;

// Re-export the primary entry points so callers can use `circlet_image::Circularizer` etc.
pub use pipeline::Circularizer;
pub use pipeline::circularize_file;
