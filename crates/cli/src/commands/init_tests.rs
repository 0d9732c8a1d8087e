// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::config::{CONFIG_FILE_NAME, DEFAULT_OUTPUT};
use crate::error::Error;
use tempfile::TempDir;

#[test]
fn create_writes_loadable_config() {
    let dir = TempDir::new().unwrap();

    let path = create(dir.path(), "acme", "widget", "main").unwrap();

    assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
    let config = Config::load(&path).unwrap();
    assert_eq!(config.owner, "acme");
    assert_eq!(config.repo, "widget");
    assert_eq!(config.branch, "main");
    assert_eq!(config.output, DEFAULT_OUTPUT);
    assert!(config.from_tag.is_empty());
}

#[test]
fn create_makes_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");

    let path = create(&nested, "acme", "widget", "master").unwrap();

    assert!(path.is_file());
}

#[test]
fn create_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let existing = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&existing, "owner = \"keep\"\n").unwrap();

    let err = create(dir.path(), "acme", "widget", "master").unwrap_err();

    assert!(matches!(err, Error::AlreadyInitialized(_)));
    assert_eq!(
        std::fs::read_to_string(&existing).unwrap(),
        "owner = \"keep\"\n"
    );
}
