// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement pass: assigns items to columns and computes their frames.

use alloc::vec::Vec;

use crate::{ColumnTracker, HeightProvider, LayoutAttributes, Rect2D, Scalar};

/// Output of one placement pass over the full item sequence.
#[derive(Clone, Debug)]
pub struct PlacementResult<S: Scalar> {
    /// One entry per item, in index order.
    pub attributes: Vec<LayoutAttributes<S>>,
    /// Total scrollable length: the bottom edge of the tallest column.
    pub content_extent: S,
}

/// Lays out `item_count` items into the columns of `columns`.
///
/// The column selection policy is strictly round-robin: item `i` lands in
/// column `i % column_count`, independent of each column's current fill. This
/// favors layout stability over perfectly even column heights and is *not*
/// the shortest-column-first packing some masonry layouts use.
///
/// For each item, the raw cell spans the full column width and
/// `height + 2 * padding` vertically; the recorded frame is the raw cell
/// inset by `padding` on all four sides. Heights missing from `provider`
/// resolve to `fallback_height`.
///
/// `columns` is reset before placement. Negative widths, paddings, and
/// heights are clamped to zero; a zero-width container produces degenerate
/// zero-width frames rather than an error. This pass has no failure mode.
pub fn place_items<S, P>(
    item_count: usize,
    provider: &P,
    columns: &mut ColumnTracker<S>,
    container_width: S,
    padding: S,
    fallback_height: S,
) -> PlacementResult<S>
where
    S: Scalar,
    P: HeightProvider<Scalar = S> + ?Sized,
{
    let container_width = container_width.clamp_non_negative();
    let padding = padding.clamp_non_negative();
    let fallback_height = fallback_height.clamp_non_negative();

    columns.reset();
    let column_count = columns.column_count();
    let column_width = container_width / S::from_usize(column_count);

    let mut attributes = Vec::with_capacity(item_count);
    let mut content_extent = S::zero();

    for index in 0..item_count {
        let column = index % column_count;

        let height = provider.item_height(index).unwrap_or(fallback_height);
        debug_assert!(
            height.is_finite(),
            "item heights must be finite; got {height:?} for index {index}"
        );
        let height = height.clamp_non_negative();
        let row_height = height + padding + padding;

        let cell = Rect2D::new(
            column_width * S::from_usize(column),
            columns.offset_of(column),
            column_width,
            row_height,
        );
        attributes.push(LayoutAttributes {
            index,
            frame: cell.inset(padding),
        });

        columns.advance(column, row_height);
        content_extent = content_extent.max(cell.max_y());
    }

    PlacementResult {
        attributes,
        content_extent,
    }
}
