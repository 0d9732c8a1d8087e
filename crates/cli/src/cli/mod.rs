// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::ReleaseArgs;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for `generate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "clog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a markdown changelog from GitHub issues and pull requests")]
#[command(
    long_about = "Generate a markdown changelog from GitHub issues and pull requests.\n\n\
    Items closed between two tags (or branches) are grouped into features, \
    enhancements, fixes and other changes. Pull requests that close a listed \
    issue are folded into that issue."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the changelog for a release
    #[command(after_help = "\
Examples:
  clog generate                          Use .clog.toml in this or a parent directory
  clog generate --from v1.0 --to v1.1    Override the release range
  clog generate --to main --stdout       Unreleased changes, printed to stdout
  clog generate --format json --stdout   Machine-readable buckets and counts")]
    Generate {
        /// Path to the configuration file
        #[arg(long, short = 'c', value_name = "path")]
        config: Option<String>,

        #[command(flatten)]
        release: ReleaseArgs,

        /// File to write the changelog to
        #[arg(long, short = 'o', value_name = "path", value_parser = non_empty_string)]
        output: Option<String>,

        /// Print to stdout instead of writing the output file
        #[arg(long)]
        stdout: bool,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },

    /// Create a .clog.toml configuration file
    #[command(after_help = "\
Examples:
  clog init --owner acme --repo widget               Track the master branch
  clog init --owner acme --repo widget -b main       Track the main branch")]
    Init {
        /// Repository owner (user or organization)
        #[arg(long, value_parser = non_empty_string)]
        owner: String,

        /// Repository name
        #[arg(long, value_parser = non_empty_string)]
        repo: String,

        /// Branch pull requests are merged into
        #[arg(long, short = 'b', default_value = "master", value_parser = non_empty_string)]
        branch: String,

        /// Directory to create the file in (default: current directory)
        #[arg(long, value_name = "path")]
        path: Option<String>,
    },

    /// Generate shell completion script
    #[command(after_help = "\
Examples:
  clog completion bash > ~/.local/share/bash-completion/completions/clog
  clog completion zsh > ~/.zfunc/_clog")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
