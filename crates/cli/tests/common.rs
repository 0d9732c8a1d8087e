// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `clog` isolated from the caller's token, log filter and user config.
pub fn clog(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("clog");
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("CLOG_LOG")
        .env_remove("CLOG_TIMINGS")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Write a `.clog.toml` for `acme/widget` pointing at `api_url`.
pub fn write_config(dir: &Path, api_url: &str) {
    let content = format!(
        r#"owner = "acme"
repo = "widget"
branch = "master"
from_tag = "v1.0"
to_tag = "v1.1"
ignore_labels = "wontfix"
api_url = "{}"
"#,
        api_url
    );
    std::fs::write(dir.join(".clog.toml"), content).unwrap();
}
