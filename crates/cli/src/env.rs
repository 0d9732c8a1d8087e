// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `GITHUB_TOKEN` if set and non-empty.
pub fn github_token() -> Option<String> {
    std::env::var(vars::GITHUB_TOKEN)
        .ok()
        .filter(|t| !t.trim().is_empty())
}

/// Returns the `CLOG_LOG` filter directive if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::CLOG_LOG).ok()
}

/// Returns `true` if `CLOG_TIMINGS` is set (any value).
pub fn clog_timings() -> bool {
    std::env::var(vars::CLOG_TIMINGS).is_ok()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
