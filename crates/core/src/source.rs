// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The remote repository seam.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::record::{Item, PullRequest, Reference};

/// Read-only access to a hosted repository.
///
/// Listing operations are paged: `index` is zero-based and a page past the
/// end is empty. Wrap them with [`paginate`](crate::paginate) to get a flat
/// iterator. Implementations own transport concerns (auth, timeouts, rate
/// limits); errors are returned as-is and abort the run.
pub trait Forge {
    /// One page of repository tags.
    fn tags_page(&self, index: usize) -> Result<Vec<Reference>>;

    /// One page of repository branches.
    fn branches_page(&self, index: usize) -> Result<Vec<Reference>>;

    /// One page of closed issues and pull requests, most recently updated
    /// first. With `since`, only items updated at or after it are listed.
    fn closed_items_page(&self, since: Option<DateTime<Utc>>, index: usize) -> Result<Vec<Item>>;

    /// Full detail of a single pull request.
    fn pull_request(&self, number: u64) -> Result<PullRequest>;

    /// Committer timestamp of a commit.
    fn commit_time(&self, sha: &str) -> Result<DateTime<Utc>>;
}

impl<F: Forge + ?Sized> Forge for &F {
    fn tags_page(&self, index: usize) -> Result<Vec<Reference>> {
        (**self).tags_page(index)
    }

    fn branches_page(&self, index: usize) -> Result<Vec<Reference>> {
        (**self).branches_page(index)
    }

    fn closed_items_page(&self, since: Option<DateTime<Utc>>, index: usize) -> Result<Vec<Item>> {
        (**self).closed_items_page(since, index)
    }

    fn pull_request(&self, number: u64) -> Result<PullRequest> {
        (**self).pull_request(number)
    }

    fn commit_time(&self, sha: &str) -> Result<DateTime<Utc>> {
        (**self).commit_time(sha)
    }
}
