// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sketchbook_benches::{clustered_points, grid_points, random_points};
use sketchbook_quadtree::{IndexedPoint, QuadTree, Region};

const SIZE: f64 = 2048.0;

fn canvas() -> Region {
    Region::new(SIZE / 2.0, SIZE / 2.0, SIZE / 2.0, SIZE / 2.0)
}

fn build(points: &[(f64, f64)], capacity: usize) -> QuadTree<u32> {
    let mut qt = QuadTree::new(canvas(), capacity);
    for (i, &(x, y)) in points.iter().enumerate() {
        let _ = qt.insert(IndexedPoint::new(x, y, i as u32));
    }
    qt
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &count in &[1_000usize, 10_000] {
        let points = random_points(count, SIZE);
        group.throughput(Throughput::Elements(count as u64));
        for &capacity in &[4usize, 10, 32] {
            group.bench_function(format!("random_n{count}_cap{capacity}"), |b| {
                b.iter(|| black_box(build(&points, capacity)))
            });
        }
    }
    let points = clustered_points(16, 500, 60.0, SIZE);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered_cap10", |b| {
        b.iter(|| black_box(build(&points, 10)))
    });
    group.finish();
}

fn bench_query_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_window");
    let points = grid_points(128, SIZE / 128.0);
    let qt = build(&points, 10);
    for &half in &[16.0_f64, 64.0, 256.0] {
        let window = Region::new(700.0, 900.0, half, half);
        group.bench_function(format!("grid_half{half}"), |b| {
            let mut out = Vec::new();
            b.iter(|| {
                out.clear();
                qt.query_into(black_box(&window), &mut out);
                black_box(out.len())
            })
        });
        group.bench_function(format!("brute_force_half{half}"), |b| {
            b.iter(|| {
                let hits = points
                    .iter()
                    .filter(|&&(x, y)| window.contains(x, y))
                    .count();
                black_box(hits)
            })
        });
    }
    group.finish();
}

/// One simulation frame: clear, re-insert everything, query a neighborhood per agent.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    for &count in &[200usize, 1_000, 4_000] {
        let points = random_points(count, SIZE);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("rebuild_and_query_n{count}"), |b| {
            b.iter_batched(
                || QuadTree::new(canvas(), 10),
                |mut qt| {
                    qt.clear();
                    for (i, &(x, y)) in points.iter().enumerate() {
                        let _ = qt.insert_at(x, y, i as u32);
                    }
                    let mut out = Vec::new();
                    let mut total = 0;
                    for &(x, y) in &points {
                        out.clear();
                        qt.query_into(&Region::new(x, y, 40.0, 40.0), &mut out);
                        total += out.len();
                    }
                    black_box(total);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("brute_force_n{count}"), |b| {
            b.iter(|| {
                let mut total = 0;
                for &(x, y) in &points {
                    let window = Region::new(x, y, 40.0, 40.0);
                    total += points
                        .iter()
                        .filter(|&&(px, py)| window.contains(px, py))
                        .count();
                }
                black_box(total)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query_window, bench_frame);
criterion_main!(benches);
