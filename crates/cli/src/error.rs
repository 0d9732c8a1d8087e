// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the clogrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no configuration found: looked for {0}\n  hint: run 'clog init --owner <owner> --repo <repo>' or pass --config")]
    ConfigNotFound(String),

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("{field} is required\n  hint: set '{field}' in the config file or pass it on the command line")]
    FieldRequired { field: &'static str },

    #[error("config error: {0}")]
    Config(String),

    #[error("github api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("github api rate limit exceeded\n  hint: set GITHUB_TOKEN or wait for the limit to reset")]
    RateLimited,

    #[error("unexpected api response: {0}")]
    UnexpectedResponse(String),

    /// Failure reported through the pipeline; the message is already final.
    #[error("{0}")]
    Upstream(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for clogrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<clog_core::Error> for Error {
    fn from(e: clog_core::Error) -> Self {
        match e {
            clog_core::Error::Api(message) => Error::Upstream(message),
            clog_core::Error::Regex(e) => Error::Config(format!("invalid link pattern: {}", e)),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
