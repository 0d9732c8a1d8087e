// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suppression of pull requests that close an already-reported issue.
//!
//! A pull request is linked to an issue when its body contains a closing
//! keyword (`close`, `fixes`, `resolved`, ...) followed anywhere later by
//! the issue number. The match is textual: `fix #100` also links issue 10.
//! Linked pull requests are dropped so the work is reported once, under the
//! issue.

use regex::Regex;
use tracing::debug;

use crate::classify::Classification;
use crate::error::Result;
use crate::record::Item;

/// Closing keywords, tolerant of a one or two character suffix.
const CLOSING_KEYWORDS: &str = "(close.?.|fix.?.|resolve.)";

/// Per-issue link patterns, compiled once per run.
#[derive(Debug)]
pub struct LinkMatcher {
    patterns: Vec<(u64, Regex)>,
}

impl LinkMatcher {
    /// Build a matcher for the given retained issues, in order.
    pub fn new(issues: &[Item]) -> Result<Self> {
        let patterns = issues
            .iter()
            .map(|issue| {
                let pattern = format!("(?is){}.*{}", CLOSING_KEYWORDS, issue.number);
                Ok((issue.number, Regex::new(&pattern)?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(LinkMatcher { patterns })
    }

    /// Returns the first issue number `body` links to.
    ///
    /// Issues are tried in the order given to [`LinkMatcher::new`]; the
    /// search stops at the first hit.
    pub fn linked_issue(&self, body: &str) -> Option<u64> {
        if body.is_empty() {
            return None;
        }
        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(body))
            .map(|(number, _)| *number)
    }
}

/// Final item set after link suppression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    /// Unlinked pull requests followed by all retained issues.
    pub items: Vec<Item>,
    /// `(pull request, issue)` pairs that caused a pull request to be dropped.
    pub suppressed: Vec<(u64, u64)>,
}

/// Drop every pull request linked to a retained issue.
pub fn resolve_links(classification: Classification) -> Result<Resolved> {
    let Classification { issues, pulls, .. } = classification;
    let matcher = LinkMatcher::new(&issues)?;

    let mut resolved = Resolved {
        items: Vec::with_capacity(pulls.len() + issues.len()),
        suppressed: Vec::new(),
    };
    for pull in pulls {
        match matcher.linked_issue(pull.body_text()) {
            Some(issue) => {
                debug!(pull = pull.number, issue, "pull request linked to issue");
                resolved.suppressed.push((pull.number, issue));
            }
            None => resolved.items.push(pull),
        }
    }
    resolved.items.extend(issues);

    Ok(resolved)
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
