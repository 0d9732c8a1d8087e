// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Release window resolution.
//!
//! A window is the half-open interval `(from, to]` between the commit dates
//! of two references. Each reference name is looked up among the tags
//! first, then among the branches. A name that matches neither leaves its
//! side of the window open: the lower bound falls back to the earliest
//! representable instant, the upper bound to the run-start time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::page::paginate;
use crate::record::Reference;
use crate::source::Forge;

/// How one side of a [`Window`] was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// Commit date of a matching tag.
    Tag,
    /// Head commit date of a matching branch.
    Branch,
    /// No reference matched; the default bound applies.
    Open,
}

/// The `(from, to]` interval items must have been closed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub from_bound: Bound,
    pub to_bound: Bound,
}

impl Window {
    /// Creates a window with explicit instants on both sides.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Window {
            from,
            to,
            from_bound: Bound::Tag,
            to_bound: Bound::Tag,
        }
    }

    /// Returns true if `at` is strictly after `from` and no later than `to`.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from < at && at <= self.to
    }

    /// Window membership for an optional close time. Open items never match.
    pub fn admits(&self, closed_at: Option<DateTime<Utc>>) -> bool {
        closed_at.is_some_and(|at| self.contains(at))
    }

    /// Lower bound usable as a server-side `since` filter, if it resolved.
    pub fn since(&self) -> Option<DateTime<Utc>> {
        match self.from_bound {
            Bound::Open => None,
            Bound::Tag | Bound::Branch => Some(self.from),
        }
    }
}

/// Linear search for the first reference named exactly `name`.
///
/// Stops consuming `refs` at the first match.
pub fn find_reference<I>(refs: I, name: &str) -> Result<Option<Reference>>
where
    I: IntoIterator<Item = Result<Reference>>,
{
    for reference in refs {
        let reference = reference?;
        if reference.name == name {
            return Ok(Some(reference));
        }
    }
    Ok(None)
}

/// Look `name` up among tags, then branches, and fetch its commit date.
fn resolve_bound<F: Forge>(forge: &F, name: &str) -> Result<Option<(Bound, DateTime<Utc>)>> {
    if name.is_empty() {
        return Ok(None);
    }

    // Branches are only fetched when no tag matched.
    let tags = paginate(|i: usize| forge.tags_page(i));
    let branches = paginate(|i: usize| forge.branches_page(i));
    let (bound, reference) = if let Some(tag) = find_reference(tags, name)? {
        (Bound::Tag, tag)
    } else if let Some(branch) = find_reference(branches, name)? {
        (Bound::Branch, branch)
    } else {
        debug!(name, "reference not found");
        return Ok(None);
    };

    let at = forge.commit_time(&reference.sha)?;
    debug!(name, sha = %reference.sha, %at, ?bound, "resolved reference");
    Ok(Some((bound, at)))
}

/// Resolve `from_ref` and `to_ref` to a [`Window`].
///
/// `now` is the run-start instant used when `to_ref` does not resolve.
/// `from <= to` is not checked; an inverted window simply admits nothing.
pub fn resolve_window<F: Forge>(
    forge: &F,
    from_ref: &str,
    to_ref: &str,
    now: DateTime<Utc>,
) -> Result<Window> {
    let (from_bound, from) = resolve_bound(forge, from_ref)?
        .unwrap_or((Bound::Open, DateTime::<Utc>::MIN_UTC));
    let (to_bound, to) = resolve_bound(forge, to_ref)?.unwrap_or((Bound::Open, now));

    info!(
        from = %from,
        to = %to,
        ?from_bound,
        ?to_bound,
        "release window"
    );

    Ok(Window {
        from,
        to,
        from_bound,
        to_bound,
    })
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
