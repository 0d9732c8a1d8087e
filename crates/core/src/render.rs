// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markdown rendering of categorized changelog entries.
//!
//! Document layout:
//!
//! ```text
//! # Changelog
//!
//! ## [v1.1](https://github.com/owner/repo/tree/v1.1) (2024-01-02)
//!
//! [Full Changelog](https://github.com/owner/repo/compare/v1.0...v1.1)
//!
//! **Fixes:**
//!
//! - Crash on save [#10](https://github.com/owner/repo/issues/10) (by @alice)
//!
//! **Other changes:**
//! ```
//!
//! Empty sections are skipped, except "Other changes" which is always
//! present. The output only depends on its inputs.

use chrono::NaiveDate;

use crate::category::{Buckets, Category};
use crate::record::Item;

pub const TITLE: &str = "# Changelog";

/// Release metadata shown in the document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Repository web URL, e.g. `https://github.com/owner/repo`.
    pub repo_url: String,
    pub from_tag: String,
    pub to_tag: String,
    pub date: NaiveDate,
}

impl Release {
    pub fn new(
        web_url: &str,
        owner: &str,
        repo: &str,
        from_tag: &str,
        to_tag: &str,
        date: NaiveDate,
    ) -> Self {
        Release {
            repo_url: format!("{}/{}/{}", web_url.trim_end_matches('/'), owner, repo),
            from_tag: from_tag.to_string(),
            to_tag: to_tag.to_string(),
            date,
        }
    }

    fn heading(&self) -> String {
        format!(
            "## [{tag}]({url}/tree/{tag}) ({date})",
            tag = self.to_tag,
            url = self.repo_url,
            date = self.date.format("%Y-%m-%d"),
        )
    }

    fn compare_link(&self) -> String {
        format!(
            "[Full Changelog]({}/compare/{}...{})",
            self.repo_url, self.from_tag, self.to_tag
        )
    }
}

/// Format one bullet line.
///
/// Pull requests credit their author; issues credit their assignees, if
/// any.
pub fn item_line(item: &Item) -> String {
    let mut line = format!("- {} [#{}]({})", item.title, item.number, item.url);
    if item.is_pull_request {
        line.push_str(&format!(" (by @{})", item.author.login));
    } else if !item.assignees.is_empty() {
        let credits: Vec<String> = item.assignees.iter().map(|a| format!("@{}", a)).collect();
        line.push_str(&format!(" (by {})", credits.join(", ")));
    }
    line
}

/// Render `buckets` as a markdown document.
pub fn render(buckets: &Buckets, release: &Release) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        String::new(),
        release.heading(),
        String::new(),
        release.compare_link(),
    ];

    for category in Category::ALL {
        let items = buckets.get(category);
        if items.is_empty() && category != Category::Other {
            continue;
        }
        lines.push(String::new());
        lines.push(format!("**{}**", category.heading()));
        if !items.is_empty() {
            lines.push(String::new());
            lines.extend(items.iter().map(item_line));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
