// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for layout scoring, variant generation and export.

use thiserror::Error;

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scoring, generating or exporting layouts
#[derive(Error, Debug)]
pub enum Error {
    /// Per-room ratios are undefined without at least one room.
    #[error("layout has no rooms")]
    EmptyLayout,

    /// Declared floor area must be a positive, finite number.
    #[error("invalid floor area: {0}")]
    InvalidArea(f64),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
