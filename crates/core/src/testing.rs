// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure: record builders and an in-memory [`Forge`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::testing::{at, issue, FakeForge};
//!
//! let forge = FakeForge::new()
//!     .tag("v1.0", at(0))
//!     .item(issue(10).closed(1).labels(&["bug"]).build());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::error::{Error, Result};
use crate::record::{Item, PullRequest, Reference, User};
use crate::source::Forge;

/// Origin instant all test timestamps are relative to.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// `t0()` plus the given number of minutes.
pub fn at(minutes: i64) -> DateTime<Utc> {
    t0() + Duration::minutes(minutes)
}

pub struct ItemBuilder {
    item: Item,
}

fn base_item(number: u64, is_pull_request: bool) -> Item {
    let kind = if is_pull_request { "pull" } else { "issues" };
    Item {
        number,
        title: format!("Item {}", number),
        closed_at: Some(at(1)),
        body: None,
        labels: Vec::new(),
        assignees: Vec::new(),
        author: User {
            login: "octocat".to_string(),
            url: "https://github.com/octocat".to_string(),
        },
        url: format!("https://github.com/owner/repo/{}/{}", kind, number),
        is_pull_request,
    }
}

/// Start building an issue closed at `at(1)`.
pub fn issue(number: u64) -> ItemBuilder {
    ItemBuilder {
        item: base_item(number, false),
    }
}

/// Start building a pull request summary closed at `at(1)`.
pub fn pull(number: u64) -> ItemBuilder {
    ItemBuilder {
        item: base_item(number, true),
    }
}

impl ItemBuilder {
    pub fn title(mut self, title: &str) -> Self {
        self.item.title = title.to_string();
        self
    }

    /// Closed `minutes` after `t0()`.
    pub fn closed(mut self, minutes: i64) -> Self {
        self.item.closed_at = Some(at(minutes));
        self
    }

    pub fn open(mut self) -> Self {
        self.item.closed_at = None;
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.item.body = Some(body.to_string());
        self
    }

    pub fn labels(mut self, labels: &[&str]) -> Self {
        self.item.labels = labels.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn assignees(mut self, assignees: &[&str]) -> Self {
        self.item.assignees = assignees.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn author(mut self, login: &str) -> Self {
        self.item.author = User {
            login: login.to_string(),
            url: format!("https://github.com/{}", login),
        };
        self
    }

    pub fn build(self) -> Item {
        self.item
    }
}

/// In-memory forge serving fixed pages.
pub struct FakeForge {
    pub page_size: usize,
    tags: Vec<Reference>,
    branches: Vec<Reference>,
    commits: HashMap<String, DateTime<Utc>>,
    items: Vec<Item>,
    pulls: HashMap<u64, PullRequest>,
    failing_pull: Option<u64>,
    /// Every `since` passed to `closed_items_page`.
    pub since_seen: RefCell<Vec<Option<DateTime<Utc>>>>,
    /// Every pull request number fetched in detail.
    pub pull_fetches: RefCell<Vec<u64>>,
}

impl Default for FakeForge {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeForge {
    pub fn new() -> Self {
        FakeForge {
            page_size: 2,
            tags: Vec::new(),
            branches: Vec::new(),
            commits: HashMap::new(),
            items: Vec::new(),
            pulls: HashMap::new(),
            failing_pull: None,
            since_seen: RefCell::new(Vec::new()),
            pull_fetches: RefCell::new(Vec::new()),
        }
    }

    pub fn tag(mut self, name: &str, committed_at: DateTime<Utc>) -> Self {
        let sha = format!("tag-{}-{}", name, self.tags.len());
        self.commits.insert(sha.clone(), committed_at);
        self.tags.push(Reference {
            name: name.to_string(),
            sha,
        });
        self
    }

    pub fn branch(mut self, name: &str, committed_at: DateTime<Utc>) -> Self {
        let sha = format!("branch-{}-{}", name, self.branches.len());
        self.commits.insert(sha.clone(), committed_at);
        self.branches.push(Reference {
            name: name.to_string(),
            sha,
        });
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Register a pull request summary together with its detail record.
    pub fn merged_pull(self, item: Item, base_label: &str) -> Self {
        self.pull_with(item, true, base_label)
    }

    pub fn pull_with(mut self, item: Item, merged: bool, base_label: &str) -> Self {
        self.pulls.insert(
            item.number,
            PullRequest {
                number: item.number,
                merged,
                base_label: base_label.to_string(),
                body: item.body.clone(),
            },
        );
        self.items.push(item);
        self
    }

    pub fn failing_pull(mut self, number: u64) -> Self {
        self.failing_pull = Some(number);
        self
    }

    fn page_of<T: Clone>(&self, all: &[T], index: usize) -> Vec<T> {
        all.iter()
            .skip(index * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect()
    }
}

impl Forge for FakeForge {
    fn tags_page(&self, index: usize) -> Result<Vec<Reference>> {
        Ok(self.page_of(&self.tags, index))
    }

    fn branches_page(&self, index: usize) -> Result<Vec<Reference>> {
        Ok(self.page_of(&self.branches, index))
    }

    fn closed_items_page(&self, since: Option<DateTime<Utc>>, index: usize) -> Result<Vec<Item>> {
        if index == 0 {
            self.since_seen.borrow_mut().push(since);
        }
        Ok(self.page_of(&self.items, index))
    }

    fn pull_request(&self, number: u64) -> Result<PullRequest> {
        self.pull_fetches.borrow_mut().push(number);
        if self.failing_pull == Some(number) {
            return Err(Error::Api(format!("pull request {} unavailable", number)));
        }
        self.pulls
            .get(&number)
            .cloned()
            .ok_or_else(|| Error::Api(format!("pull request {} not found", number)))
    }

    fn commit_time(&self, sha: &str) -> Result<DateTime<Utc>> {
        self.commits
            .get(sha)
            .copied()
            .ok_or_else(|| Error::Api(format!("commit {} not found", sha)))
    }
}
