// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public geometry types: frames and per-item layout attributes.

use crate::Scalar;

/// An axis-aligned rectangle stored as origin plus size.
///
/// This is the frame type handed to hosts: `x`/`y` are the top-left corner and
/// `width`/`height` the size, all in the host's scroll coordinate space
/// (typically logical pixels). Sizes are expected to be non-negative; helpers
/// that shrink a rect clamp the resulting size at zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect2D<S> {
    /// Left edge.
    pub x: S,
    /// Top edge.
    pub y: S,
    /// Horizontal size (non-negative).
    pub width: S,
    /// Vertical size (non-negative).
    pub height: S,
}

impl<S: Scalar> Rect2D<S> {
    /// Creates a new rect from origin and size.
    #[inline]
    pub const fn new(x: S, y: S, width: S, height: S) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn max_x(&self) -> S {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn max_y(&self) -> S {
        self.y + self.height
    }

    /// Shrinks the rect by `padding` on all four sides.
    ///
    /// The resulting size is clamped at zero, so insetting a rect narrower or
    /// shorter than `2 * padding` yields a degenerate rect rather than an
    /// inverted one.
    #[inline]
    pub fn inset(&self, padding: S) -> Self {
        let twice = padding + padding;
        Self {
            x: self.x + padding,
            y: self.y + padding,
            width: (self.width - twice).max(S::zero()),
            height: (self.height - twice).max(S::zero()),
        }
    }

    /// Determines whether this rect overlaps another in any way.
    ///
    /// The edge of a rect is considered to be part of itself, meaning that two
    /// rects that merely share an edge are considered to intersect. Viewport
    /// queries use the same convention in every query path.
    ///
    /// # Examples
    ///
    /// ```
    /// use ashlar_masonry::Rect2D;
    ///
    /// let a = Rect2D::new(0.0, 0.0, 10.0, 10.0);
    /// let b = Rect2D::new(5.0, 5.0, 10.0, 10.0);
    /// assert!(a.intersects(&b));
    ///
    /// let c = Rect2D::new(10.0, 0.0, 10.0, 10.0);
    /// assert!(a.intersects(&c));
    ///
    /// let d = Rect2D::new(11.0, 0.0, 10.0, 10.0);
    /// assert!(!a.intersects(&d));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x <= other.max_x()
            && self.max_x() >= other.x
            && self.y <= other.max_y()
            && self.max_y() >= other.y
    }

    /// Returns `true` if the rect has no area. Assumes no NaN.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= S::zero() || self.height <= S::zero()
    }
}

/// The computed placement for one item: its ordinal position and visual frame.
///
/// The frame is already inset by the configured padding, so hosts can hand it
/// directly to whatever draws the item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutAttributes<S> {
    /// Ordinal position of the item in the externally owned sequence.
    pub index: usize,
    /// Visual frame of the item in content coordinates.
    pub frame: Rect2D<S>,
}
