// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `clog generate`: load config, run the pipeline, write the result.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use clog_core::{Buckets, Clock, Forge, Summary, SystemClock, Window};

use crate::cli::{OutputFormat, ReleaseArgs};
use crate::config::{find_config_file, Config, Overrides};
use crate::env;
use crate::error::{Error, Result};
use crate::github::GithubClient;

/// Machine-readable form of a run.
#[derive(Debug, Serialize)]
struct Report<'a> {
    window: &'a Window,
    summary: &'a Summary,
    buckets: &'a Buckets,
}

pub fn run(
    config_path: Option<String>,
    release: ReleaseArgs,
    output: Option<String>,
    stdout: bool,
    format: OutputFormat,
) -> Result<()> {
    let config = load_config(config_path.as_deref(), release.overrides(output))?;
    let token = config.token_or(env::github_token());
    let client = GithubClient::new(&config.api_url, &config.owner, &config.repo, token)?;

    let text = crate::time_phase!("generate", {
        render_output(&client, &SystemClock, &config, format)?
    });

    if stdout {
        print!("{}", text);
        return Ok(());
    }

    let path = Path::new(&config.output);
    crate::time_phase!("write", { write_output(path, &text)? });
    println!("Wrote {}", path.display());
    Ok(())
}

/// Load the config file, apply overrides and validate the result.
///
/// Without an explicit `path` the file is searched for from the current
/// directory upwards.
pub fn load_config(path: Option<&str>, overrides: Overrides) -> Result<Config> {
    let path = match path {
        Some(p) => {
            let p = PathBuf::from(p);
            if !p.is_file() {
                return Err(Error::ConfigNotFound(p.display().to_string()));
            }
            p
        }
        None => find_config_file()?,
    };
    debug!(path = %path.display(), "loading config");

    let mut config = Config::load(&path)?;
    config.apply(overrides);
    config.validate()?;
    Ok(config)
}

/// Run the pipeline and format its result.
pub fn render_output<F: Forge, C: Clock>(
    forge: &F,
    clock: &C,
    config: &Config,
    format: OutputFormat,
) -> Result<String> {
    let changelog = clog_core::generate(forge, clock, &config.settings())?;
    match format {
        OutputFormat::Markdown => Ok(changelog.markdown),
        OutputFormat::Json => {
            let report = Report {
                window: &changelog.window,
                summary: &changelog.summary,
                buckets: &changelog.buckets,
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Replace `path` with `text`, creating parent directories as needed.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
