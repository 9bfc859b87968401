// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sketchbook_benches::random_points;
use sketchbook_quadtree::{QuadTree, Region};

use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};

const SIZE: f64 = 2048.0;

fn bench_rstar_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare");
    for &count in &[1_000usize, 10_000] {
        let points = random_points(count, SIZE);
        let window = Region::new(700.0, 900.0, 64.0, 64.0);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function(format!("quadtree_build_query_n{count}"), |b| {
            b.iter_batched(
                || QuadTree::new(Region::new(SIZE / 2.0, SIZE / 2.0, SIZE / 2.0, SIZE / 2.0), 10),
                |mut qt| {
                    for (i, &(x, y)) in points.iter().enumerate() {
                        let _ = qt.insert_at(x, y, i as u32);
                    }
                    black_box(qt.query(&window).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{count}"), |b| {
            b.iter_batched(
                || {
                    points
                        .iter()
                        .enumerate()
                        .map(|(i, &(x, y))| GeomWithData::new([x, y], i as u32))
                        .collect::<Vec<_>>()
                },
                |entries| {
                    let tree = RTree::bulk_load(entries);
                    let aabb = AABB::from_corners(
                        [window.min_x(), window.min_y()],
                        [window.max_x(), window.max_y()],
                    );
                    black_box(tree.locate_in_envelope(&aabb).count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare);
criterion_main!(benches);
