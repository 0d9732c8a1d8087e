// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON shapes returned by the GitHub REST API.
//!
//! Only the fields the changelog needs are declared; everything else in
//! the payloads is ignored.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::Deserialize;

use clog_core::{Item, PullRequest, Reference, User};

/// Login shown for accounts that no longer exist.
const GHOST_LOGIN: &str = "ghost";

#[derive(Debug, Clone, Deserialize)]
pub struct UserJson {
    pub login: String,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelJson {
    pub name: String,
}

/// Entry of `GET /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueJson {
    pub number: u64,
    pub title: String,
    pub closed_at: Option<DateTime<Utc>>,
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<LabelJson>,
    #[serde(default)]
    pub assignees: Vec<UserJson>,
    pub user: Option<UserJson>,
    pub html_url: String,
    /// Present (with links) only on pull requests.
    pub pull_request: Option<IgnoredAny>,
}

impl From<IssueJson> for Item {
    fn from(json: IssueJson) -> Self {
        let author = json.user.map_or_else(
            || User {
                login: GHOST_LOGIN.to_string(),
                url: String::new(),
            },
            |u| User {
                login: u.login,
                url: u.html_url,
            },
        );
        Item {
            number: json.number,
            title: json.title,
            closed_at: json.closed_at,
            body: json.body,
            labels: json.labels.into_iter().map(|l| l.name).collect(),
            assignees: json.assignees.into_iter().map(|a| a.login).collect(),
            author,
            url: json.html_url,
            is_pull_request: json.pull_request.is_some(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseJson {
    pub label: String,
}

/// `GET /repos/{owner}/{repo}/pulls/{number}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PullJson {
    pub number: u64,
    #[serde(default)]
    pub merged: bool,
    pub base: BaseJson,
    pub body: Option<String>,
}

impl From<PullJson> for PullRequest {
    fn from(json: PullJson) -> Self {
        PullRequest {
            number: json.number,
            merged: json.merged,
            base_label: json.base.label,
            body: json.body,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitRefJson {
    pub sha: String,
}

/// Entry of the tag and branch listings.
#[derive(Debug, Clone, Deserialize)]
pub struct RefJson {
    pub name: String,
    pub commit: CommitRefJson,
}

impl From<RefJson> for Reference {
    fn from(json: RefJson) -> Self {
        Reference {
            name: json.name,
            sha: json.commit.sha,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignatureJson {
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitCommitJson {
    pub committer: Option<SignatureJson>,
}

/// `GET /repos/{owner}/{repo}/commits/{sha}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitJson {
    pub sha: String,
    pub commit: GitCommitJson,
}

impl CommitJson {
    pub fn committed_at(&self) -> Option<DateTime<Utc>> {
        self.commit.committer.as_ref().map(|c| c.date)
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorJson {
    pub message: String,
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
