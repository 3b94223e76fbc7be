// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The height-provider seam between the engine and its host.
//!
//! The engine never inspects item content. Hosts supply intrinsic content
//! heights through [`HeightProvider`], a single-method capability trait, and
//! the engine derives all geometry from those values.

use crate::Scalar;

/// Source of intrinsic item heights, indexed by ordinal position.
///
/// Returning `None` for an index is legitimate: the placement pass substitutes
/// the engine's fallback height rather than treating it as an error. Heights
/// are expected to be finite and non-negative; finite negative values are
/// clamped to zero during placement.
pub trait HeightProvider {
    /// Scalar type used for heights.
    type Scalar: Scalar;

    /// The intrinsic content height of the item at `index`, if known.
    fn item_height(&self, index: usize) -> Option<Self::Scalar>;
}

impl<S: Scalar, F> HeightProvider for F
where
    F: Fn(usize) -> Option<S>,
{
    type Scalar = S;

    fn item_height(&self, index: usize) -> Option<S> {
        self(index)
    }
}

/// A [`HeightProvider`] backed by a slice of pre-measured heights.
///
/// Out-of-range indices report `None`, which resolves to the fallback height.
#[derive(Copy, Clone, Debug)]
pub struct SliceHeights<'a, S> {
    heights: &'a [S],
}

impl<'a, S: Scalar> SliceHeights<'a, S> {
    /// Creates a provider over `heights`.
    #[must_use]
    pub const fn new(heights: &'a [S]) -> Self {
        Self { heights }
    }
}

impl<S: Scalar> HeightProvider for SliceHeights<'_, S> {
    type Scalar = S;

    fn item_height(&self, index: usize) -> Option<S> {
        self.heights.get(index).copied()
    }
}
