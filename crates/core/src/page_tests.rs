// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use std::cell::Cell;
use yare::parameterized;

fn pages_of(records: Vec<u32>, size: usize) -> impl FnMut(usize) -> Result<Vec<u32>> {
    move |index| {
        Ok(records
            .iter()
            .skip(index * size)
            .take(size)
            .copied()
            .collect())
    }
}

#[parameterized(
    one_per_page = { 1 },
    uneven = { 3 },
    exact_fit = { 5 },
    single_page = { 100 },
)]
fn yields_all_records_in_order_regardless_of_page_size(size: usize) {
    let records: Vec<u32> = (1..=10).collect();
    let collected: Vec<u32> = paginate(pages_of(records.clone(), size))
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(collected, records);
}

#[test]
fn empty_listing_fetches_one_page() {
    let mut iter = paginate(pages_of(Vec::new(), 10));
    assert!(iter.next().is_none());
    assert_eq!(iter.pages_fetched(), 1);
    assert!(iter.next().is_none());
    assert_eq!(iter.pages_fetched(), 1);
}

#[test]
fn fetches_lazily() {
    let calls = Cell::new(0);
    let source = |index: usize| -> Result<Vec<usize>> {
        calls.set(calls.get() + 1);
        Ok(if index < 3 { vec![index] } else { Vec::new() })
    };
    let mut iter = paginate(source);
    assert_eq!(calls.get(), 0);
    assert_eq!(iter.next().unwrap().unwrap(), 0);
    assert_eq!(calls.get(), 1);
    assert_eq!(iter.next().unwrap().unwrap(), 1);
    assert_eq!(calls.get(), 2);
}

#[test]
fn stops_at_first_empty_page() {
    // Page 2 is empty even though page 3 would have data.
    let source = |index: usize| -> Result<Vec<usize>> {
        Ok(match index {
            0 | 1 => vec![index],
            2 => Vec::new(),
            _ => vec![99],
        })
    };
    let collected: Vec<usize> = paginate(source).collect::<Result<_>>().unwrap();
    assert_eq!(collected, vec![0, 1]);
}

#[test]
fn error_is_yielded_once_then_ends() {
    let source = |index: usize| -> Result<Vec<u8>> {
        if index == 0 {
            Ok(vec![1, 2])
        } else {
            Err(Error::Api("boom".to_string()))
        }
    };
    let mut iter = paginate(source);
    assert_eq!(iter.next().unwrap().unwrap(), 1);
    assert_eq!(iter.next().unwrap().unwrap(), 2);
    assert!(matches!(iter.next(), Some(Err(Error::Api(_)))));
    assert!(iter.next().is_none());
}
