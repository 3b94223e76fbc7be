// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine controller: configuration, preparation, and queries.

use core::num::NonZeroUsize;

use crate::{
    AttributeCache, ColumnQuery, ColumnTracker, HeightProvider, LayoutAttributes, Rect2D, Scalar,
    place_items,
};

/// Height, in layout units, substituted for items whose provider reports no
/// intrinsic height.
pub const DEFAULT_FALLBACK_HEIGHT: usize = 180;

bitflags::bitflags! {
    /// Reasons a re-preparation is pending, accumulated between an
    /// invalidating event and the next [`MasonryLayout::prepare`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InvalidationReasons: u8 {
        /// The container width changed.
        const BOUNDS_CHANGED = 0b0000_0001;
        /// The item count or an item's reported height changed.
        const DATA_CHANGED   = 0b0000_0010;
        /// The host forced a recomputation.
        const EXPLICIT       = 0b0000_0100;
    }
}

/// A two-phase masonry grid layout engine.
///
/// One engine instance serves exactly one grid view; there is no shared or
/// global state. The engine alternates between two states:
///
/// - **Empty** (initial, or after any invalidation): the attribute cache is
///   blank and [`MasonryLayout::needs_prepare`] reports `true`.
/// - **Ready** (after [`MasonryLayout::prepare`]): queries answer from the
///   cache without recomputation.
///
/// Changing the container width or item count, or calling
/// [`MasonryLayout::invalidate`], wipes the cache and returns to **Empty**.
/// `prepare` while already **Ready** is a no-op, so hosts may call it
/// unconditionally at the top of every layout pass.
///
/// The engine is single-threaded by design: it is owned by whichever thread
/// drives the host's render cycle, and `prepare`/queries are never called
/// concurrently. Hosts with a separate layout thread must marshal
/// invalidations onto that thread.
///
/// # Example
///
/// ```
/// use core::num::NonZeroUsize;
/// use ashlar_masonry::{MasonryLayout, Rect2D, SliceHeights};
///
/// let mut layout = MasonryLayout::new(NonZeroUsize::new(2).unwrap(), 8.0);
/// layout.set_container_width(360.0);
/// layout.set_item_count(3);
///
/// let heights = SliceHeights::new(&[100.0, 150.0, 80.0]);
/// assert!(layout.prepare(&heights));
/// assert_eq!(layout.content_extent(), 212.0);
///
/// // Second prepare without an intervening invalidation is a no-op.
/// assert!(!layout.prepare(&heights));
///
/// let viewport = Rect2D::new(0.0, 0.0, 360.0, 120.0);
/// let visible: Vec<_> = layout.visible_attributes(viewport).collect();
/// assert_eq!(visible.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct MasonryLayout<S: Scalar> {
    columns: ColumnTracker<S>,
    padding: S,
    container_width: S,
    item_count: usize,
    fallback_height: S,

    cache: AttributeCache<S>,
    pending: InvalidationReasons,
    prepared: bool,
}

impl<S: Scalar> MasonryLayout<S> {
    /// Creates an engine with the given column count and per-side padding.
    ///
    /// The column count is a static configuration constant; a zero count is
    /// unrepresentable by construction. Negative padding is clamped to zero.
    /// The container width starts at zero and the item count at zero; hosts
    /// set both before the first prepare.
    #[must_use]
    pub fn new(column_count: NonZeroUsize, padding: S) -> Self {
        Self {
            columns: ColumnTracker::new(column_count),
            padding: padding.clamp_non_negative(),
            container_width: S::zero(),
            item_count: 0,
            fallback_height: S::from_usize(DEFAULT_FALLBACK_HEIGHT),
            cache: AttributeCache::new(),
            pending: InvalidationReasons::empty(),
            prepared: false,
        }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.column_count()
    }

    /// The fixed padding inset on all four sides of each frame.
    #[must_use]
    pub const fn padding(&self) -> S {
        self.padding
    }

    /// Current container width.
    #[must_use]
    pub const fn container_width(&self) -> S {
        self.container_width
    }

    /// Width of one column (`container_width / column_count`).
    #[must_use]
    pub fn column_width(&self) -> S {
        self.container_width / S::from_usize(self.columns.column_count())
    }

    /// Current item count.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// The column item `index` is assigned to (round-robin: `index % C`).
    #[must_use]
    pub fn column_of(&self, index: usize) -> usize {
        index % self.columns.column_count()
    }

    /// The height substituted for items with no reported height.
    #[must_use]
    pub const fn fallback_height(&self) -> S {
        self.fallback_height
    }

    /// Sets the container width. A change invalidates the cached layout.
    ///
    /// Negative widths are clamped to zero; a zero width is accepted and
    /// yields degenerate zero-width frames rather than an error.
    pub fn set_container_width(&mut self, width: S) {
        let width = width.clamp_non_negative();
        if width != self.container_width {
            self.container_width = width;
            self.invalidate_with(InvalidationReasons::BOUNDS_CHANGED);
        }
    }

    /// Sets the item count. A change invalidates the cached layout.
    pub fn set_item_count(&mut self, count: usize) {
        if count != self.item_count {
            self.item_count = count;
            self.invalidate_with(InvalidationReasons::DATA_CHANGED);
        }
    }

    /// Sets the fallback height. A change invalidates the cached layout.
    pub fn set_fallback_height(&mut self, height: S) {
        let height = height.clamp_non_negative();
        if height != self.fallback_height {
            self.fallback_height = height;
            self.invalidate_with(InvalidationReasons::DATA_CHANGED);
        }
    }

    /// Forces the next [`MasonryLayout::prepare`] to recompute from scratch.
    ///
    /// Hosts call this when an item's reported height changes without the
    /// item count changing. The cache is wiped immediately; queries answer
    /// empty until the next prepare.
    pub fn invalidate(&mut self) {
        self.invalidate_with(InvalidationReasons::EXPLICIT);
    }

    fn invalidate_with(&mut self, reason: InvalidationReasons) {
        self.pending |= reason;
        self.prepared = false;
        self.cache.clear();
    }

    /// Returns `true` if the engine is in the **Empty** state and the next
    /// query would answer from a blank cache.
    #[must_use]
    pub const fn needs_prepare(&self) -> bool {
        !self.prepared
    }

    /// The reasons accumulated since the layout was last prepared.
    ///
    /// Empty while the engine is **Ready**. Before the first prepare the set
    /// is also empty: there is nothing stale, merely nothing computed yet.
    #[must_use]
    pub const fn pending_invalidations(&self) -> InvalidationReasons {
        self.pending
    }

    /// Runs a full placement pass if one is needed.
    ///
    /// Returns `true` if a pass ran, `false` if the cached layout was still
    /// valid and the call was a no-op. The pass is synchronous and
    /// proportional to the item count; it cannot fail.
    pub fn prepare<P>(&mut self, provider: &P) -> bool
    where
        P: HeightProvider<Scalar = S> + ?Sized,
    {
        if self.prepared {
            return false;
        }
        let result = place_items(
            self.item_count,
            provider,
            &mut self.columns,
            self.container_width,
            self.padding,
            self.fallback_height,
        );
        self.cache.store(result);
        self.pending = InvalidationReasons::empty();
        self.prepared = true;
        true
    }

    /// The total scrollable length computed by the last prepare.
    ///
    /// Zero while the engine is **Empty**.
    #[must_use]
    pub fn content_extent(&self) -> S {
        self.cache.content_extent()
    }

    /// The cached attributes for `index`, or `None` if out of range or the
    /// engine is **Empty**.
    #[must_use]
    pub fn attributes_at(&self, index: usize) -> Option<&LayoutAttributes<S>> {
        self.cache.get(index)
    }

    /// All cached attributes in index order.
    #[must_use]
    pub fn all_attributes(&self) -> &[LayoutAttributes<S>] {
        self.cache.as_slice()
    }

    /// Every cached item whose frame intersects `viewport`, in index order.
    ///
    /// This is a pure read over the cache (a linear scan; see
    /// [`MasonryLayout::column_query`] for a logarithmic alternative) and is
    /// intended to be called on every render/scroll frame. Frames that merely
    /// touch the viewport edge are included.
    pub fn visible_attributes(
        &self,
        viewport: Rect2D<S>,
    ) -> impl Iterator<Item = &LayoutAttributes<S>> {
        self.cache
            .iter()
            .filter(move |attributes| attributes.frame.intersects(&viewport))
    }

    /// Builds a column-indexed view of the cache for accelerated viewport
    /// queries.
    ///
    /// Worth it only when item counts climb past a few hundred; the borrow
    /// ties the view to the current cache generation, so it cannot outlive an
    /// invalidation.
    #[must_use]
    pub fn column_query(&self) -> ColumnQuery<'_, S> {
        ColumnQuery::new(&self.cache, self.columns.column_count())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use super::{InvalidationReasons, MasonryLayout};
    use crate::{Rect2D, SliceHeights};

    fn two_column_layout() -> MasonryLayout<f32> {
        let mut layout = MasonryLayout::new(NonZeroUsize::new(2).unwrap(), 8.0);
        layout.set_container_width(360.0);
        layout.set_item_count(3);
        layout
    }

    const HEIGHTS: [f32; 3] = [100.0, 150.0, 80.0];

    #[test]
    fn prepare_populates_cache_and_extent() {
        let mut layout = two_column_layout();
        assert!(layout.needs_prepare());
        assert_eq!(layout.content_extent(), 0.0);

        assert!(layout.prepare(&SliceHeights::new(&HEIGHTS)));
        assert!(!layout.needs_prepare());
        assert_eq!(layout.all_attributes().len(), 3);
        assert_eq!(layout.content_extent(), 212.0);
        assert_eq!(layout.column_width(), 180.0);
    }

    #[test]
    fn prepare_is_idempotent_until_invalidated() {
        let mut layout = two_column_layout();
        let heights = SliceHeights::new(&HEIGHTS);

        assert!(layout.prepare(&heights));
        let first: Vec<_> = layout.all_attributes().to_vec();

        assert!(!layout.prepare(&heights));
        assert_eq!(layout.all_attributes(), first.as_slice());

        layout.invalidate();
        assert!(layout.prepare(&heights));
        assert_eq!(layout.all_attributes(), first.as_slice());
    }

    #[test]
    fn invalidation_wipes_the_cache_immediately() {
        let mut layout = two_column_layout();
        layout.prepare(&SliceHeights::new(&HEIGHTS));

        layout.invalidate();
        assert!(layout.needs_prepare());
        assert_eq!(layout.content_extent(), 0.0);
        assert!(layout.attributes_at(0).is_none());
        assert_eq!(
            layout
                .visible_attributes(Rect2D::new(0.0, 0.0, 360.0, 1000.0))
                .count(),
            0
        );
    }

    #[test]
    fn setters_record_their_invalidation_reasons() {
        let mut layout = two_column_layout();
        layout.prepare(&SliceHeights::new(&HEIGHTS));
        assert_eq!(
            layout.pending_invalidations(),
            InvalidationReasons::empty()
        );

        layout.set_container_width(400.0);
        assert_eq!(
            layout.pending_invalidations(),
            InvalidationReasons::BOUNDS_CHANGED
        );

        layout.set_item_count(5);
        assert_eq!(
            layout.pending_invalidations(),
            InvalidationReasons::BOUNDS_CHANGED | InvalidationReasons::DATA_CHANGED
        );

        // Preparing clears the pending set.
        layout.prepare(&SliceHeights::new(&HEIGHTS));
        assert_eq!(
            layout.pending_invalidations(),
            InvalidationReasons::empty()
        );
    }

    #[test]
    fn unchanged_setter_values_do_not_invalidate() {
        let mut layout = two_column_layout();
        layout.prepare(&SliceHeights::new(&HEIGHTS));

        layout.set_container_width(360.0);
        layout.set_item_count(3);
        assert!(!layout.needs_prepare());
    }

    #[test]
    fn invalidate_then_prepare_matches_a_fresh_instance() {
        let heights = SliceHeights::new(&HEIGHTS);

        let mut reused = two_column_layout();
        reused.prepare(&heights);
        reused.invalidate();
        reused.prepare(&heights);

        let mut fresh = two_column_layout();
        fresh.prepare(&heights);

        assert_eq!(reused.all_attributes(), fresh.all_attributes());
        assert_eq!(reused.content_extent(), fresh.content_extent());
    }

    #[test]
    fn visible_attributes_filters_by_intersection() {
        let mut layout = two_column_layout();
        layout.prepare(&SliceHeights::new(&HEIGHTS));

        // A band over the top of the grid sees items 0 and 1 only.
        let top: Vec<usize> = layout
            .visible_attributes(Rect2D::new(0.0, 0.0, 360.0, 120.0))
            .map(|a| a.index)
            .collect();
        assert_eq!(top, [0, 1]);

        // The full content area sees everything.
        let all: Vec<usize> = layout
            .visible_attributes(Rect2D::new(0.0, 0.0, 360.0, layout.content_extent()))
            .map(|a| a.index)
            .collect();
        assert_eq!(all, [0, 1, 2]);

        // A viewport past the content extent sees nothing.
        assert_eq!(
            layout
                .visible_attributes(Rect2D::new(0.0, 500.0, 360.0, 100.0))
                .count(),
            0
        );
    }

    #[test]
    fn single_item_lookups_are_total() {
        let mut layout = two_column_layout();
        layout.prepare(&SliceHeights::new(&HEIGHTS));

        assert_eq!(layout.attributes_at(2).map(|a| a.index), Some(2));
        assert!(layout.attributes_at(3).is_none());
    }

    #[test]
    fn empty_item_sequence_prepares_to_an_empty_ready_state() {
        let mut layout = MasonryLayout::new(NonZeroUsize::new(2).unwrap(), 8.0);
        layout.set_container_width(360.0);

        assert!(layout.prepare(&SliceHeights::<f32>::new(&[])));
        assert!(!layout.needs_prepare());
        assert_eq!(layout.all_attributes().len(), 0);
        assert_eq!(layout.content_extent(), 0.0);
    }

    #[test]
    fn column_assignment_helper_matches_placement() {
        let mut layout = MasonryLayout::new(NonZeroUsize::new(3).unwrap(), 0.0);
        layout.set_container_width(300.0);
        layout.set_item_count(7);
        layout.prepare(&SliceHeights::new(&[10.0_f32; 7]));

        for attr in layout.all_attributes() {
            let column = layout.column_of(attr.index);
            assert_eq!(attr.index % 3, column);
            assert_eq!(attr.frame.x, 100.0 * column as f32);
        }
    }
}
