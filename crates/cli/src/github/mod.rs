// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub REST API access.
//!
//! [`GithubClient`] implements [`clog_core::Forge`] with blocking HTTP
//! requests, one per page or detail record. It does not retry or wait out
//! rate limits; failures abort the run.

mod client;
mod wire;

pub use client::{GithubClient, PER_PAGE};
pub use wire::{CommitJson, ErrorJson, IssueJson, LabelJson, PullJson, RefJson, UserJson};
