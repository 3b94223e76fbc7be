// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::num::NonZeroUsize;

use ashlar_masonry::{MasonryLayout, Rect2D, SliceHeights};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn height(&mut self) -> f64 {
        // Card heights between 80 and 330 units.
        80.0 + (self.next_u64() % 250) as f64
    }
}

fn gen_heights(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Rng::new(seed);
    (0..n).map(|_| rng.height()).collect()
}

fn prepared_layout(heights: &[f64]) -> MasonryLayout<f64> {
    let mut layout = MasonryLayout::new(NonZeroUsize::new(2).unwrap(), 8.0);
    layout.set_container_width(390.0);
    layout.set_item_count(heights.len());
    layout.prepare(&SliceHeights::new(heights));
    layout
}

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("masonry_prepare");
    for n in [100_usize, 1_000, 10_000] {
        let heights = gen_heights(n, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &heights, |b, heights| {
            let mut layout = MasonryLayout::new(NonZeroUsize::new(2).unwrap(), 8.0);
            layout.set_container_width(390.0);
            let provider = SliceHeights::new(heights);
            b.iter(|| {
                layout.set_item_count(heights.len());
                layout.invalidate();
                layout.prepare(&provider);
                black_box(layout.content_extent())
            });
        });
    }
    group.finish();
}

fn bench_visible_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("masonry_visible_query");
    for n in [100_usize, 1_000, 10_000] {
        let heights = gen_heights(n, 0x5eed);
        let layout = prepared_layout(&heights);
        // A phone-sized viewport halfway down the content.
        let viewport = Rect2D::new(0.0, layout.content_extent() * 0.5, 390.0, 844.0);

        group.bench_with_input(BenchmarkId::new("linear", n), &layout, |b, layout| {
            b.iter(|| black_box(layout.visible_attributes(viewport).count()));
        });

        group.bench_with_input(BenchmarkId::new("column_indexed", n), &layout, |b, layout| {
            let query = layout.column_query();
            b.iter(|| black_box(query.visible_attributes(viewport).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_prepare, bench_visible_query);
criterion_main!(benches);
