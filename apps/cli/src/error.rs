// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for argument handling.

use thiserror::Error;

/// Problems with the command line itself.
#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {option}: {value}")]
    InvalidValue { option: &'static str, value: String },

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
}
