// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! In-memory [`Forge`] for command tests. Every listing fits on page 0.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use clog_core::{Error, Forge, Item, PullRequest, Reference, Result, User};

pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[derive(Default)]
pub struct StubForge {
    tags: Vec<Reference>,
    commits: HashMap<String, DateTime<Utc>>,
    items: Vec<Item>,
    pulls: HashMap<u64, PullRequest>,
}

impl StubForge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, name: &str, at: DateTime<Utc>) -> Self {
        let sha = format!("sha-{}", name);
        self.commits.insert(sha.clone(), at);
        self.tags.push(Reference {
            name: name.to_string(),
            sha,
        });
        self
    }

    /// An issue in `acme/widget`.
    pub fn issue(mut self, number: u64, title: &str, closed: DateTime<Utc>, labels: &[&str]) -> Self {
        let mut item = item(number, title, closed, false);
        item.labels = labels.iter().map(|l| l.to_string()).collect();
        item.assignees = vec!["alice".to_string()];
        self.items.push(item);
        self
    }

    /// A pull request in `acme/widget` with its detail record.
    pub fn pull(
        mut self,
        number: u64,
        title: &str,
        closed: DateTime<Utc>,
        merged: bool,
        body: Option<&str>,
    ) -> Self {
        self.items.push(item(number, title, closed, true));
        self.pulls.insert(
            number,
            PullRequest {
                number,
                merged,
                base_label: "acme:master".to_string(),
                body: body.map(str::to_string),
            },
        );
        self
    }

    /// A pull request listed as closed whose detail lookup fails.
    pub fn pull_without_detail(mut self, number: u64, closed: DateTime<Utc>) -> Self {
        self.items.push(item(number, "Lost", closed, true));
        self
    }
}

fn item(number: u64, title: &str, closed: DateTime<Utc>, is_pull_request: bool) -> Item {
    let kind = if is_pull_request { "pull" } else { "issues" };
    Item {
        number,
        title: title.to_string(),
        closed_at: Some(closed),
        body: None,
        labels: Vec::new(),
        assignees: Vec::new(),
        author: User {
            login: "bob".to_string(),
            url: "https://github.com/bob".to_string(),
        },
        url: format!("https://github.com/acme/widget/{}/{}", kind, number),
        is_pull_request,
    }
}

fn first_page<T: Clone>(all: &[T], index: usize) -> Vec<T> {
    if index == 0 {
        all.to_vec()
    } else {
        Vec::new()
    }
}

impl Forge for StubForge {
    fn tags_page(&self, index: usize) -> Result<Vec<Reference>> {
        Ok(first_page(&self.tags, index))
    }

    fn branches_page(&self, _index: usize) -> Result<Vec<Reference>> {
        Ok(Vec::new())
    }

    fn closed_items_page(&self, _since: Option<DateTime<Utc>>, index: usize) -> Result<Vec<Item>> {
        Ok(first_page(&self.items, index))
    }

    fn pull_request(&self, number: u64) -> Result<PullRequest> {
        self.pulls
            .get(&number)
            .cloned()
            .ok_or_else(|| Error::Api(format!("no pull request #{}", number)))
    }

    fn commit_time(&self, sha: &str) -> Result<DateTime<Utc>> {
        self.commits
            .get(sha)
            .copied()
            .ok_or_else(|| Error::Api(format!("no commit {}", sha)))
    }
}
