#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line rasterization and clipping.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use raster_kit::clip::{cohen_sutherland, liang_barsky};
use raster_kit::geometry::{ClipRect, Point};
use raster_kit::render::line;
use std::hint::black_box;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    for length in [10, 100, 1_000, 10_000] {
        let start = Point::new(0, 0);
        let end = Point::new(length, length / 3);

        group.bench_with_input(BenchmarkId::new("dda", length), &length, |b, _| {
            b.iter(|| line::dda(black_box(start), black_box(end)));
        });
        group.bench_with_input(BenchmarkId::new("bresenham", length), &length, |b, _| {
            b.iter(|| line::bresenham(black_box(start), black_box(end)));
        });
    }

    group.finish();
}

fn clip_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip");

    let rect = ClipRect::from_corners(Point::new(100, 100), Point::new(900, 700));
    let segments: Vec<(Point, Point)> = (0..1000)
        .map(|i| (Point::new(-200 + i, -100), Point::new(1200 - i, 900 + i % 50)))
        .collect();

    group.bench_function("cohen_sutherland_1000", |b| {
        b.iter(|| {
            segments
                .iter()
                .filter_map(|&(s, e)| cohen_sutherland(black_box(s), black_box(e), &rect))
                .count()
        });
    });
    group.bench_function("liang_barsky_1000", |b| {
        b.iter(|| {
            segments
                .iter()
                .filter_map(|&(s, e)| liang_barsky(black_box(s), black_box(e), &rect))
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, line_benchmark, clip_benchmark);
criterion_main!(benches);
