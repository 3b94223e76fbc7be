// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-indexed viewport queries.
//!
//! The engine's built-in visible-attributes query is a linear scan, which is
//! the right tradeoff for the tens-to-low-hundreds of items typical of a feed
//! page. [`ColumnQuery`] is the opt-in alternative for larger grids: it
//! groups cached attributes by column, where frame `y` positions are
//! monotonic, and binary-searches each column for the visible band.

use alloc::vec::Vec;

use crate::{AttributeCache, LayoutAttributes, Rect2D, Scalar};

/// A column-indexed view over one cache generation.
///
/// Built from the round-robin placement invariant: within a column, items
/// appear in index order with monotonically non-decreasing `y`. The view
/// borrows the cache, so the borrow checker retires it before any
/// invalidation can mutate the underlying attributes.
#[derive(Debug)]
pub struct ColumnQuery<'a, S: Scalar> {
    columns: Vec<Vec<&'a LayoutAttributes<S>>>,
}

impl<'a, S: Scalar> ColumnQuery<'a, S> {
    /// Groups the cached attributes of `cache` into `column_count` columns.
    #[must_use]
    pub fn new(cache: &'a AttributeCache<S>, column_count: usize) -> Self {
        debug_assert!(column_count > 0, "column_count must be at least 1");
        let mut columns: Vec<Vec<&'a LayoutAttributes<S>>> = Vec::new();
        columns.resize_with(column_count.max(1), Vec::new);
        let column_count = columns.len();
        for attributes in cache.iter() {
            columns[attributes.index % column_count].push(attributes);
        }
        Self { columns }
    }

    /// Every item whose frame intersects `viewport`, in index order.
    ///
    /// Returns exactly the set the linear scan would return, including frames
    /// that merely touch the viewport edge. Runs in `O(C log n + k)` for `C`
    /// columns, `n` items, and `k` results.
    #[must_use]
    pub fn visible_attributes(&self, viewport: Rect2D<S>) -> Vec<&'a LayoutAttributes<S>> {
        let mut hits: Vec<&'a LayoutAttributes<S>> = Vec::new();
        for column in &self.columns {
            // First entry not entirely above the viewport.
            let first = column.partition_point(|attributes| {
                matches!(
                    attributes.frame.max_y().partial_cmp(&viewport.y),
                    Some(core::cmp::Ordering::Less)
                )
            });
            for attributes in &column[first..] {
                if attributes.frame.y > viewport.max_y() {
                    break;
                }
                // The y band matched; the x test still matters for viewports
                // narrower than the grid.
                if attributes.frame.intersects(&viewport) {
                    hits.push(attributes);
                }
            }
        }
        hits.sort_unstable_by_key(|attributes| attributes.index);
        hits
    }
}
