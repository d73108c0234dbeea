/*
SPDX-License-Identifier: MPL-2.0
*/

//! Error type for the I/O boundary.
//!
//! The engine itself never fails: a missing or malformed field degrades to
//! an omitted segment or a placeholder string. Errors only arise when
//! loading record files for callers such as the CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),
}
