// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-column fill-state tracking for a single placement pass.

use core::num::NonZeroUsize;

use smallvec::SmallVec;

use crate::Scalar;

/// Running vertical fill offsets, one per column.
///
/// Offsets start at zero and advance monotonically as items are assigned; the
/// offset of a column is the `y` at which its next item starts. Column indices
/// are produced by the placement pass's own round-robin policy, so passing an
/// out-of-range column is a programming error (caught by `debug_assert!` and
/// slice indexing, not an error channel).
#[derive(Clone, Debug)]
pub struct ColumnTracker<S: Scalar> {
    // Inline storage covers typical feed grids (2-4 columns) without heap use.
    offsets: SmallVec<[S; 4]>,
}

impl<S: Scalar> ColumnTracker<S> {
    /// Creates a tracker for `column_count` columns, all offsets at zero.
    #[must_use]
    pub fn new(column_count: NonZeroUsize) -> Self {
        let mut offsets = SmallVec::new();
        offsets.resize(column_count.get(), S::zero());
        Self { offsets }
    }

    /// Number of columns tracked.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.offsets.len()
    }

    /// Resets all offsets to zero for the start of a placement pass.
    pub fn reset(&mut self) {
        for offset in &mut self.offsets {
            *offset = S::zero();
        }
    }

    /// Current fill offset of `column`.
    #[must_use]
    pub fn offset_of(&self, column: usize) -> S {
        debug_assert!(
            column < self.offsets.len(),
            "column index out of bounds: column={column}, count={}",
            self.offsets.len()
        );
        self.offsets[column]
    }

    /// Advances `column` by `amount`.
    ///
    /// Amounts are expected to be finite and non-negative so offsets stay
    /// monotonic; finite negative values are clamped to zero and NaNs are
    /// caught in debug builds.
    pub fn advance(&mut self, column: usize, amount: S) {
        debug_assert!(
            amount.is_finite(),
            "column advances must be finite; got {amount:?}"
        );
        debug_assert!(
            column < self.offsets.len(),
            "column index out of bounds: column={column}, count={}",
            self.offsets.len()
        );
        self.offsets[column] = self.offsets[column] + amount.clamp_non_negative();
    }

    /// The maximum fill offset across all columns (the tallest column).
    #[must_use]
    pub fn max_offset(&self) -> S {
        self.offsets
            .iter()
            .copied()
            .fold(S::zero(), |acc, offset| acc.max(offset))
    }
}
