// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Circlet.

use thiserror::Error;

/// Top-level error type for all Circlet operations.
#[derive(Debug, Error)]
pub enum CircletError {
    /// The input file could not be read or was not a decodable raster format.
    #[error("image decode failed: {0}")]
    Decode(String),

    /// PNG encoding or writing the output file failed.
    #[error("image encode failed: {0}")]
    Encode(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CircletError>;
