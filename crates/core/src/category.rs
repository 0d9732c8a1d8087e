// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label-based grouping of changelog entries.

use std::fmt;

use serde::Serialize;

use crate::record::Item;

/// A changelog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Features,
    Enhancements,
    Fixes,
    /// Anything no label group claimed.
    Other,
}

impl Category {
    /// All categories in output order.
    pub const ALL: [Category; 4] = [
        Category::Features,
        Category::Enhancements,
        Category::Fixes,
        Category::Other,
    ];

    /// Label groups in priority order. `Other` has none.
    const GROUPS: [(Category, &'static [&'static str]); 3] = [
        (Category::Features, &["new feature", "user story"]),
        (Category::Enhancements, &["enhancement"]),
        (Category::Fixes, &["bug", "bug (critical)", "correction"]),
    ];

    /// Labels that select this category.
    pub fn labels(&self) -> &'static [&'static str] {
        Self::GROUPS
            .iter()
            .find(|(c, _)| c == self)
            .map(|(_, labels)| *labels)
            .unwrap_or(&[])
    }

    /// Section label used in the rendered document.
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Features => "New features:",
            Category::Enhancements => "Enhancements:",
            Category::Fixes => "Fixes:",
            Category::Other => "Other changes:",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Features => "features",
            Category::Enhancements => "enhancements",
            Category::Fixes => "fixes",
            Category::Other => "other",
        }
    }

    /// The category of `item`: the first category, in priority order,
    /// whose labels include one of the item's.
    pub fn of(item: &Item) -> Category {
        Self::ALL
            .into_iter()
            .find(|c| c.labels().iter().any(|l| item.has_label(l)))
            .unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Items grouped by [`Category`], each bucket in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Buckets {
    pub features: Vec<Item>,
    pub enhancements: Vec<Item>,
    pub fixes: Vec<Item>,
    pub other: Vec<Item>,
}

impl Buckets {
    pub fn get(&self, category: Category) -> &[Item] {
        match category {
            Category::Features => &self.features,
            Category::Enhancements => &self.enhancements,
            Category::Fixes => &self.fixes,
            Category::Other => &self.other,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<Item> {
        match category {
            Category::Features => &mut self.features,
            Category::Enhancements => &mut self.enhancements,
            Category::Fixes => &mut self.fixes,
            Category::Other => &mut self.other,
        }
    }

    pub fn push(&mut self, item: Item) {
        self.get_mut(Category::of(&item)).push(item);
    }

    /// Total number of items across all buckets.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `items` into [`Buckets`].
pub fn categorize<I: IntoIterator<Item = Item>>(items: I) -> Buckets {
    let mut buckets = Buckets::default();
    for item in items {
        buckets.push(item);
    }
    buckets
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
