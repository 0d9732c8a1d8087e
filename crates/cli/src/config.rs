// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! Configuration is stored in a `.clog.toml` file, usually at the root of
//! the repository checkout, and includes:
//! - `owner`, `repo`: the hosted repository
//! - `branch`: the branch pull requests must be merged into
//! - `from_tag`, `to_tag`: the references bounding the release window
//! - `ignore_labels`: comma-separated issue labels to leave out
//! - `token`, `output`, `api_url`, `web_url`: optional

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use clog_core::{IgnoreLabels, Settings};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".clog.toml";
pub const DEFAULT_OUTPUT: &str = "CHANGELOG.md";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_WEB_URL: &str = "https://github.com";

/// Configuration stored in `.clog.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub repo: String,
    /// Branch pull requests must target to count as shipped.
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub from_tag: String,
    #[serde(default)]
    pub to_tag: String,
    /// Comma-separated label names, e.g. `"stale,duplicate,wontfix"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ignore_labels: String,
    /// API token. `GITHUB_TOKEN` is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Changelog file path, relative to the working directory.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_web_url")]
    pub web_url: String,
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_web_url() -> String {
    DEFAULT_WEB_URL.to_string()
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub branch: Option<String>,
    pub from_tag: Option<String>,
    pub to_tag: Option<String>,
    pub output: Option<String>,
}

impl Config {
    /// Creates a config for `owner/repo` with defaults everywhere else.
    pub fn new(owner: &str, repo: &str, branch: &str) -> Self {
        Config {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: branch.to_string(),
            from_tag: String::new(),
            to_tag: String::new(),
            ignore_labels: String::new(),
            token: None,
            output: default_output(),
            api_url: default_api_url(),
            web_url: default_web_url(),
        }
    }

    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Saves configuration to the given file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Applies command-line overrides. Empty values are ignored.
    pub fn apply(&mut self, overrides: Overrides) {
        fn set(slot: &mut String, value: Option<String>) {
            if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
                *slot = v;
            }
        }
        set(&mut self.branch, overrides.branch);
        set(&mut self.from_tag, overrides.from_tag);
        set(&mut self.to_tag, overrides.to_tag);
        set(&mut self.output, overrides.output);
    }

    /// Checks that every required setting is present.
    ///
    /// `from_tag` and `to_tag` may be empty: an empty reference leaves that
    /// side of the release window open.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldRequired`] for the first empty required field.
    pub fn validate(&self) -> Result<()> {
        let required: [(&'static str, &str); 4] = [
            ("owner", &self.owner),
            ("repo", &self.repo),
            ("branch", &self.branch),
            ("output", &self.output),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::FieldRequired { field });
            }
        }
        Ok(())
    }

    /// Token from the file, falling back to `env_token`.
    pub fn token_or(&self, env_token: Option<String>) -> Option<String> {
        self.token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or(env_token)
    }

    /// Pipeline settings for this configuration.
    pub fn settings(&self) -> Settings {
        Settings {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            branch: self.branch.clone(),
            from_tag: self.from_tag.clone(),
            to_tag: self.to_tag.clone(),
            ignore_labels: IgnoreLabels::parse(&self.ignore_labels),
            web_url: self.web_url.clone(),
        }
    }
}

/// Find `.clog.toml` by walking up from `start`.
pub fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// User-level fallback: `<config_dir>/clog/config.toml`.
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("clog").join("config.toml"))
}

/// Locate the configuration file for the current directory.
///
/// Walks up from the current directory, then tries the user-level file.
pub fn find_config_file() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    if let Some(path) = find_config_file_from(&cwd) {
        return Ok(path);
    }
    if let Some(path) = user_config_file().filter(|p| p.is_file()) {
        return Ok(path);
    }
    Err(Error::ConfigNotFound(
        cwd.join(CONFIG_FILE_NAME).display().to_string(),
    ))
}

/// Write a new `.clog.toml` into `dir`, refusing to overwrite.
pub fn init_config_file(dir: &Path, config: &Config) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(Error::AlreadyInitialized(path.display().to_string()));
    }
    config.save(&path)?;
    Ok(path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
