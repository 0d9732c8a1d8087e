// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! clog-core: release changelog reconciliation.
//!
//! This crate turns the closed issues and pull requests of a hosted
//! repository into a categorized markdown changelog for one release window.
//! It never talks to the network itself; all remote data comes through the
//! [`Forge`] trait, which the `clog` CLI implements on top of the GitHub REST
//! API.
//!
//! # Pipeline
//!
//! - [`page`] - lazy iteration over paginated listings
//! - [`window`] - resolve two references to a time window
//! - [`classify`] - split in-window items into issues and merged PRs
//! - [`link`] - drop PRs that close an issue already reported
//! - [`category`] - bucket the survivors by label
//! - [`render`] - serialize the buckets to markdown
//!
//! [`generate`] chains all of the above.

pub mod category;
pub mod classify;
pub mod clock;
pub mod error;
pub mod link;
pub mod page;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod source;
pub mod window;

#[cfg(test)]
#[path = "testing.rs"]
pub(crate) mod testing;

pub use category::{categorize, Buckets, Category};
pub use classify::{classify, Classification, IgnoreLabels};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use link::{resolve_links, LinkMatcher, Resolved};
pub use page::{paginate, PageSource, Paginated};
pub use pipeline::{generate, Changelog, Settings, Summary};
pub use record::{Item, PullRequest, Reference, User};
pub use render::{item_line, render, Release};
pub use source::Forge;
pub use window::{find_reference, resolve_window, Bound, Window};
