// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for walkthrough playback
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring playback
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("playback speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("camera damping must be in (0, 1], got {0}")]
    InvalidDamping(f64),
}
