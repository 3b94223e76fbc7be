// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Storage for the most recent placement result.

use alloc::vec::Vec;

use crate::{LayoutAttributes, PlacementResult, Scalar};

/// Holds the attributes and content extent computed by the last placement
/// pass.
///
/// The cache is derived, ephemeral state: it is populated wholesale by a
/// placement pass and wiped wholesale on invalidation, never patched in
/// place. A single changed item can shift every later item in its column, so
/// a full rebuild is the safe invariant.
///
/// Lookups are total: an out-of-range index returns `None` rather than
/// panicking, to tolerate benign races between a host's invalidation and an
/// in-flight lookup carrying an index from a previous generation.
#[derive(Clone, Debug)]
pub struct AttributeCache<S: Scalar> {
    attributes: Vec<LayoutAttributes<S>>,
    content_extent: S,
}

impl<S: Scalar> AttributeCache<S> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attributes: Vec::new(),
            content_extent: S::zero(),
        }
    }

    /// Returns `true` if no placement result is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// The cached attributes for `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LayoutAttributes<S>> {
        self.attributes.get(index)
    }

    /// Iterates over all cached attributes in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, LayoutAttributes<S>> {
        self.attributes.iter()
    }

    /// All cached attributes in index order.
    #[must_use]
    pub fn as_slice(&self) -> &[LayoutAttributes<S>] {
        &self.attributes
    }

    /// The content extent recorded by the last placement pass.
    #[must_use]
    pub fn content_extent(&self) -> S {
        self.content_extent
    }

    /// Replaces the cache contents with a fresh placement result.
    pub fn store(&mut self, result: PlacementResult<S>) {
        self.attributes = result.attributes;
        self.content_extent = result.content_extent;
    }

    /// Discards all cached attributes and resets the content extent to zero.
    pub fn clear(&mut self) {
        self.attributes.clear();
        self.content_extent = S::zero();
    }
}

impl<S: Scalar> Default for AttributeCache<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::AttributeCache;
    use crate::{LayoutAttributes, PlacementResult, Rect2D};

    fn sample() -> PlacementResult<f32> {
        PlacementResult {
            attributes: vec![
                LayoutAttributes {
                    index: 0,
                    frame: Rect2D::new(0.0, 0.0, 50.0, 100.0),
                },
                LayoutAttributes {
                    index: 1,
                    frame: Rect2D::new(50.0, 0.0, 50.0, 150.0),
                },
            ],
            content_extent: 150.0,
        }
    }

    #[test]
    fn starts_empty_and_stores_wholesale() {
        let mut cache = AttributeCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.content_extent(), 0.0);

        cache.store(sample());
        assert!(!cache.is_empty());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.content_extent(), 150.0);
    }

    #[test]
    fn lookups_are_total() {
        let mut cache = AttributeCache::new();
        cache.store(sample());

        assert_eq!(cache.get(1).map(|a| a.index), Some(1));
        // A stale index from a previous generation yields None, not a panic.
        assert!(cache.get(99).is_none());
    }

    #[test]
    fn clear_resets_entries_and_extent() {
        let mut cache = AttributeCache::new();
        cache.store(sample());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.content_extent(), 0.0);
        assert!(cache.get(0).is_none());
    }
}
