// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A feed host driving the masonry engine: content-derived heights,
//! lazy preparation, and per-frame viewport queries.
//!
//! This example plays the role of the hosting scroll surface:
//! - it owns the story data and derives each card's height from content,
//! - it prepares the engine when the width or item count changes,
//! - it queries visible frames as a viewport walks down the content.
//!
//! Run:
//! - `cargo run -p ashlar_demos --example stories_feed`

use std::num::NonZeroUsize;

use ashlar_masonry::{MasonryLayout, Rect2D};
use kurbo::Rect;

/// One story card: an image with a fixed aspect ratio plus a text block.
struct Story {
    title: &'static str,
    tags: usize,
}

impl Story {
    /// Card height: image block at a 4:3 aspect for the column width, plus
    /// a content block that grows with title and tag metadata.
    fn height(&self, column_width: f64) -> f64 {
        let image = column_width * 0.75;
        let text = 24.0 + self.title.len() as f64 * 1.5 + self.tags as f64 * 18.0;
        image + text
    }
}

/// Converts the host's kurbo viewport into the engine's frame type.
fn engine_rect(rect: Rect) -> Rect2D<f64> {
    Rect2D::new(rect.x0, rect.y0, rect.width(), rect.height())
}

fn main() {
    let stories = [
        Story { title: "morning ride up the col", tags: 3 },
        Story { title: "sourdough, attempt 4", tags: 1 },
        Story { title: "skatepark", tags: 0 },
        Story { title: "balcony tomatoes are finally in", tags: 2 },
        Story { title: "weekend watercolor", tags: 1 },
        Story { title: "new strings day", tags: 0 },
        Story { title: "first 5k without stopping", tags: 4 },
        Story { title: "birdwatching log: 12 species", tags: 2 },
    ];

    // One engine per grid view, configured once.
    let mut layout = MasonryLayout::new(NonZeroUsize::new(2).unwrap(), 8.0);
    layout.set_container_width(390.0);
    layout.set_item_count(stories.len());

    // Heights depend on the column width, which the engine derives from the
    // container width it was just given.
    let column_width = layout.column_width();
    let heights =
        |index: usize| stories.get(index).map(|story| story.height(column_width));

    assert!(layout.prepare(&heights));
    println!(
        "prepared {} cards, content extent {:.1}",
        layout.all_attributes().len(),
        layout.content_extent()
    );

    // Walk a viewport down the feed the way a scroll loop would.
    let viewport_height = 400.0;
    let mut scroll_offset = 0.0;
    while scroll_offset < layout.content_extent() {
        let viewport = Rect::new(0.0, scroll_offset, 390.0, scroll_offset + viewport_height);
        let visible: Vec<_> = layout
            .visible_attributes(engine_rect(viewport))
            .map(|attributes| attributes.index)
            .collect();
        println!("scroll {scroll_offset:>6.1}: visible {visible:?}");

        // Repeated prepares between invalidations are no-ops.
        assert!(!layout.prepare(&heights));
        scroll_offset += viewport_height;
    }

    // The column-indexed query returns the same set as the linear scan.
    let band = Rect::new(0.0, 300.0, 390.0, 900.0);
    let query = layout.column_query();
    let indexed: Vec<_> = query
        .visible_attributes(engine_rect(band))
        .iter()
        .map(|attributes| attributes.index)
        .collect();
    let linear: Vec<_> = layout
        .visible_attributes(engine_rect(band))
        .map(|attributes| attributes.index)
        .collect();
    assert_eq!(indexed, linear);
    println!("column query over {band:?} -> {indexed:?}");

    // Rotating the device: width changes invalidate, the next prepare relays.
    layout.set_container_width(844.0);
    assert!(layout.needs_prepare());
    let column_width = layout.column_width();
    let heights =
        |index: usize| stories.get(index).map(|story| story.height(column_width));
    assert!(layout.prepare(&heights));
    println!(
        "after rotation: content extent {:.1}",
        layout.content_extent()
    );
}
