// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! clogrs - changelog generation for GitHub repositories.
//!
//! This crate provides the `clog` CLI on top of [`clog_core`]: the config
//! file, the GitHub REST client and the command implementations.
//!
//! # Main Components
//!
//! - [`Config`] - `.clog.toml` settings and command-line overrides
//! - [`GithubClient`] - blocking REST client implementing [`clog_core::Forge`]
//! - [`Error`] - Error types for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use clogrs::{find_config_file, Config, GithubClient};
//! use clog_core::{generate, SystemClock};
//!
//! let config = Config::load(&find_config_file()?)?;
//! let client = GithubClient::new(&config.api_url, &config.owner, &config.repo, None)?;
//! let changelog = generate(&client, &SystemClock, &config.settings())?;
//! print!("{}", changelog.markdown);
//! ```

mod cli;
mod commands;
pub mod logging;
pub mod timings;

pub mod config;
pub mod env;
pub mod error;
pub mod github;

pub use cli::{Cli, Command, OutputFormat, ReleaseArgs};
pub use config::{find_config_file, init_config_file, Config, Overrides};
pub use error::{Error, Result};
pub use github::GithubClient;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            config,
            release,
            output,
            stdout,
            format,
        } => commands::generate::run(config, release, output, stdout, format),
        Command::Init {
            owner,
            repo,
            branch,
            path,
        } => commands::init::run(owner, repo, branch, path),
        Command::Completion { shell } => commands::completion::run(shell),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
