// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only snapshots of remote repository records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account on the hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub url: String,
}

/// A closed-items listing entry: either an issue or a pull request summary.
///
/// Listings return pull requests in a lighter shape that lacks merge state
/// and base branch; see [`PullRequest`] for the detail record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Repository-unique number shared by issues and pull requests.
    pub number: u64,
    pub title: String,
    /// Absent while the item is still open.
    pub closed_at: Option<DateTime<Utc>>,
    pub body: Option<String>,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
    pub author: User,
    pub url: String,
    pub is_pull_request: bool,
}

impl Item {
    /// Returns true if any label is exactly `name`.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }

    /// Returns the body text, treating an absent body as empty.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// Full detail of a single pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub merged: bool,
    /// Base branch in `owner:branch` form.
    pub base_label: String,
    pub body: Option<String>,
}

/// A named pointer to a commit: a tag or a branch head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    pub sha: String,
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
