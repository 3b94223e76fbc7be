// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=ashlar_masonry --heading-base-level=0

//! Ashlar Masonry: a two-phase masonry (Pinterest-style) grid layout core.
//!
//! This crate lays out an ordered item sequence as a fixed-column,
//! variable-height card grid and answers viewport queries over the result. It
//! is renderer-agnostic: hosts own the data and views, feed in item counts
//! and intrinsic heights, and consume computed frames.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for frames,
//!   offsets, and extents.
//! - [`HeightProvider`]: the one-method seam through which hosts report
//!   intrinsic item heights. Unknown heights resolve to a fallback rather
//!   than failing.
//! - [`place_items`]: the placement pass. Items are assigned to columns
//!   **round-robin** (item `i` lands in column `i % C`, regardless of fill
//!   balance), each frame is the raw cell inset by the configured padding,
//!   and the content extent is the bottom of the tallest column.
//! - [`AttributeCache`]: the wholesale-rebuilt store of
//!   [`LayoutAttributes`], valid between invalidations.
//! - [`MasonryLayout`]: the engine owned by one grid view. It tracks
//!   configuration, runs `prepare` lazily and idempotently, records pending
//!   [`InvalidationReasons`], and serves per-frame queries without
//!   recomputation.
//! - [`ColumnQuery`]: an opt-in column-indexed query path for large grids.
//!
//! This crate deliberately does **not** know about widgets, scrolling
//! physics, or any UI framework. Host frameworks are responsible for:
//!
//! - Owning the item data and deriving heights from content.
//! - Calling [`MasonryLayout::prepare`] whenever the item count, container
//!   width, or a reported height changes (the engine makes repeated calls
//!   cheap).
//! - Sizing their scrollable area from [`MasonryLayout::content_extent`].
//! - Querying [`MasonryLayout::visible_attributes`] each render frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use ashlar_masonry::{MasonryLayout, Rect2D, SliceHeights};
//!
//! let mut layout = MasonryLayout::new(NonZeroUsize::new(2).unwrap(), 8.0);
//! layout.set_container_width(360.0);
//! layout.set_item_count(3);
//!
//! // Heights come from the host; one pass computes every frame.
//! let heights = SliceHeights::new(&[100.0, 150.0, 80.0]);
//! layout.prepare(&heights);
//!
//! assert_eq!(layout.content_extent(), 212.0);
//! let first_screen: Vec<_> = layout
//!     .visible_attributes(Rect2D::new(0.0, 0.0, 360.0, 200.0))
//!     .collect();
//! assert_eq!(first_screen.len(), 3);
//! ```
//!
//! Heights can also come from a closure, which suits view-model-backed
//! hosts:
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use ashlar_masonry::MasonryLayout;
//!
//! let titles = ["morning ride", "sourdough, attempt 4", "skatepark"];
//! let mut layout = MasonryLayout::new(NonZeroUsize::new(2).unwrap(), 6.0);
//! layout.set_container_width(320.0);
//! layout.set_item_count(titles.len());
//!
//! // Image block plus a text block proportional to the title length.
//! let heights = |i: usize| titles.get(i).map(|t| 120.0 + t.len() as f64 * 4.0);
//! layout.prepare(&heights);
//! assert_eq!(layout.all_attributes().len(), 3);
//! ```
//!
//! All coordinates live in the host's scroll space (typically logical
//! pixels) and are expected to be finite; negative sizes are clamped.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod columns;
mod height;
mod masonry;
mod placement;
mod query;
mod scalar;
mod types;

pub use cache::AttributeCache;
pub use columns::ColumnTracker;
pub use height::{HeightProvider, SliceHeights};
pub use masonry::{DEFAULT_FALLBACK_HEIGHT, InvalidationReasons, MasonryLayout};
pub use placement::{PlacementResult, place_items};
pub use query::ColumnQuery;
pub use scalar::Scalar;
pub use types::{LayoutAttributes, Rect2D};
