// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Circlet — Error definitions shared across all crates.

pub mod error;

pub use error::CircletError;
pub use error::Result;
