// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flattening of paginated listings into a single lazy iterator.

use std::marker::PhantomData;

use crate::error::Result;

/// Something that can fetch page `index` (zero-based) of a listing.
///
/// An empty page marks the end of the listing. Any `FnMut(usize) ->
/// Result<Vec<T>>` closure is a page source.
pub trait PageSource<T> {
    fn fetch_page(&mut self, index: usize) -> Result<Vec<T>>;
}

impl<T, F> PageSource<T> for F
where
    F: FnMut(usize) -> Result<Vec<T>>,
{
    fn fetch_page(&mut self, index: usize) -> Result<Vec<T>> {
        self(index)
    }
}

/// Lazy iterator over every record of a paginated listing, in page order.
///
/// Pages are fetched on demand, one at a time; nothing is fetched until the
/// first call to `next`. Iteration ends at the first empty page. A fetch
/// error is yielded once, after which the iterator is exhausted.
pub struct Paginated<T, S> {
    source: S,
    next_index: usize,
    buffer: std::vec::IntoIter<T>,
    done: bool,
    _marker: PhantomData<fn() -> T>,
}

/// Wrap a page source in a [`Paginated`] iterator.
pub fn paginate<T, S: PageSource<T>>(source: S) -> Paginated<T, S> {
    Paginated {
        source,
        next_index: 0,
        buffer: Vec::new().into_iter(),
        done: false,
        _marker: PhantomData,
    }
}

impl<T, S: PageSource<T>> Paginated<T, S> {
    /// Number of pages fetched so far, including the terminating empty one.
    pub fn pages_fetched(&self) -> usize {
        self.next_index
    }
}

impl<T, S: PageSource<T>> Iterator for Paginated<T, S> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.next() {
                return Some(Ok(record));
            }
            if self.done {
                return None;
            }

            let index = self.next_index;
            self.next_index += 1;
            match self.source.fetch_page(index) {
                Ok(page) if page.is_empty() => {
                    self.done = true;
                    return None;
                }
                Ok(page) => {
                    tracing::trace!(page = index, records = page.len(), "fetched page");
                    self.buffer = page.into_iter();
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
