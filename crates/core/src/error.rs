// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for clog-core operations.

use thiserror::Error;

/// All possible errors that can occur while building a changelog.
#[derive(Debug, Error)]
pub enum Error {
    /// A call through [`Forge`](crate::Forge) failed. The message comes from
    /// the implementation and is passed through untouched.
    #[error("api error: {0}")]
    Api(String),

    #[error("invalid link pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// A specialized Result type for clog-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
