// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end changelog generation.

use serde::Serialize;
use tracing::info;

use crate::category::{categorize, Buckets, Category};
use crate::classify::{classify, IgnoreLabels};
use crate::clock::Clock;
use crate::error::Result;
use crate::link::resolve_links;
use crate::page::paginate;
use crate::render::{render, Release};
use crate::source::Forge;
use crate::window::{resolve_window, Window};

/// Everything a run needs to know about the repository and release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub owner: String,
    pub repo: String,
    /// Branch pull requests must have been merged into.
    pub branch: String,
    pub from_tag: String,
    pub to_tag: String,
    pub ignore_labels: IgnoreLabels,
    /// Web root used for links in the document, e.g. `https://github.com`.
    pub web_url: String,
}

impl Settings {
    /// Base label a pull request must target: `owner:branch`.
    pub fn target_base(&self) -> String {
        format!("{}:{}", self.owner, self.branch)
    }
}

/// Counts collected along the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Closed-item listing pages requested, including the final empty one.
    pub pages: usize,
    pub scanned: usize,
    pub in_window: usize,
    pub issues: usize,
    pub pulls: usize,
    /// Pull requests dropped because they close a reported issue.
    pub linked: usize,
    pub features: usize,
    pub enhancements: usize,
    pub fixes: usize,
    pub other: usize,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Changelog {
    pub markdown: String,
    pub buckets: Buckets,
    pub window: Window,
    pub summary: Summary,
}

/// Build the changelog for `settings`.
///
/// Reads the clock once; that instant is both the open upper bound of the
/// window and the release date in the header.
pub fn generate<F: Forge, C: Clock>(forge: &F, clock: &C, settings: &Settings) -> Result<Changelog> {
    let now = clock.now();
    let window = resolve_window(forge, &settings.from_tag, &settings.to_tag, now)?;

    let since = window.since();
    let mut items = paginate(|i: usize| forge.closed_items_page(since, i));
    let classification = classify(
        forge,
        items.by_ref(),
        &window,
        &settings.ignore_labels,
        &settings.target_base(),
    )?;

    let mut summary = Summary {
        pages: items.pages_fetched(),
        scanned: classification.scanned,
        in_window: classification.in_window,
        issues: classification.issues.len(),
        pulls: classification.pulls.len(),
        ..Summary::default()
    };

    let resolved = resolve_links(classification)?;
    summary.linked = resolved.suppressed.len();

    let buckets = categorize(resolved.items);
    summary.features = buckets.get(Category::Features).len();
    summary.enhancements = buckets.get(Category::Enhancements).len();
    summary.fixes = buckets.get(Category::Fixes).len();
    summary.other = buckets.get(Category::Other).len();

    let release = Release::new(
        &settings.web_url,
        &settings.owner,
        &settings.repo,
        &settings.from_tag,
        &settings.to_tag,
        now.date_naive(),
    );
    let markdown = render(&buckets, &release);

    info!(
        pages = summary.pages,
        scanned = summary.scanned,
        in_window = summary.in_window,
        issues = summary.issues,
        pulls = summary.pulls,
        linked = summary.linked,
        "changelog generated"
    );

    Ok(Changelog {
        markdown,
        buckets,
        window,
        summary,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
