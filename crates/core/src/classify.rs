// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Split closed items into reportable issues and merged pull requests.

use tracing::debug;

use crate::error::Result;
use crate::record::Item;
use crate::source::Forge;
use crate::window::Window;

/// Labels that exclude an issue from the changelog.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreLabels(Vec<String>);

impl IgnoreLabels {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IgnoreLabels(labels.into_iter().map(Into::into).collect())
    }

    /// Parse a comma-separated list. Entries are trimmed; empty entries are
    /// dropped.
    pub fn parse(csv: &str) -> Self {
        IgnoreLabels(
            csv.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    /// Returns the first of `item`'s labels that is ignored, if any.
    pub fn first_match<'a>(&self, item: &'a Item) -> Option<&'a str> {
        item.labels
            .iter()
            .map(String::as_str)
            .find(|l| self.contains(l))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of [`classify`]: two disjoint sequences in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub issues: Vec<Item>,
    /// Merged pull requests into the target branch. Bodies come from the
    /// detail record.
    pub pulls: Vec<Item>,
    /// Items read from the listing.
    pub scanned: usize,
    /// Items whose close time fell inside the window.
    pub in_window: usize,
}

/// Classify every item of `items`.
///
/// Keeps items closed inside `window`. A pull request is fetched in full and
/// kept only when it was merged into `target_base` (`owner:branch`); any
/// other pull request is dropped and never reconsidered as an issue. An
/// issue is kept unless one of its labels is in `ignore`.
pub fn classify<F, I>(
    forge: &F,
    items: I,
    window: &Window,
    ignore: &IgnoreLabels,
    target_base: &str,
) -> Result<Classification>
where
    F: Forge,
    I: IntoIterator<Item = Result<Item>>,
{
    let mut out = Classification::default();

    for item in items {
        let mut item = item?;
        out.scanned += 1;

        if !window.admits(item.closed_at) {
            debug!(number = item.number, closed_at = ?item.closed_at, "outside window");
            continue;
        }
        out.in_window += 1;

        if item.is_pull_request {
            let detail = forge.pull_request(item.number)?;
            if !detail.merged {
                debug!(number = item.number, "pull request not merged");
                continue;
            }
            if detail.base_label != target_base {
                debug!(
                    number = item.number,
                    base = %detail.base_label,
                    "pull request targets another branch"
                );
                continue;
            }
            item.body = detail.body;
            out.pulls.push(item);
        } else if let Some(label) = ignore.first_match(&item) {
            debug!(number = item.number, label, "issue has ignored label");
        } else {
            out.issues.push(item);
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
