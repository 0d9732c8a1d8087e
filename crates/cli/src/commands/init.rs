// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use crate::config::{init_config_file, Config};
use crate::error::Result;

pub fn run(owner: String, repo: String, branch: String, path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let file = create(&target_path, &owner, &repo, &branch)?;

    println!("Initialized changelog config at {}", file.display());
    println!("Repository: {}/{}", owner, repo);
    println!("Branch: {}", branch);
    println!();
    println!("Set from_tag and to_tag in the file, or pass --from and --to to 'clog generate'.");
    println!("An empty from_tag covers everything up to to_tag.");
    Ok(())
}

/// Write a fresh config for `owner/repo` into `dir`.
pub fn create(dir: &Path, owner: &str, repo: &str, branch: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    init_config_file(dir, &Config::new(owner, repo, branch))
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
