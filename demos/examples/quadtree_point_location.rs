// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point location.
//!
//! Drifting points are re-indexed every frame and a moving window counts the
//! points under it, reporting how much of the tree each query touched.
//!
//! Run:
//! - `cargo run -p sketchbook_demos --example quadtree_point_location`

use kurbo::{Point, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sketchbook_quadtree::{QuadTree, Region};

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 640.0;

fn main() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut points: Vec<(Point, Vec2)> = (0..1000)
        .map(|_| {
            let p = Point::new(rng.random_range(0.0..WIDTH), rng.random_range(0.0..HEIGHT));
            let v = Vec2::new(rng.random_range(-0.1..0.1), rng.random_range(-0.1..0.1));
            (p, v)
        })
        .collect();

    let mut qt = QuadTree::new(Region::from_min_max(0.0, 0.0, WIDTH, HEIGHT), 5);
    for frame in 0..10 {
        qt.clear();
        for (i, (p, v)) in points.iter_mut().enumerate() {
            *p += *v;
            // Wrap back to the opposite edge, like the sketch does.
            if p.x >= WIDTH {
                p.x = 0.0;
            }
            if p.y >= HEIGHT {
                p.y = 0.0;
            }
            if p.x < 0.0 {
                p.x += WIDTH;
            }
            if p.y < 0.0 {
                p.y += HEIGHT;
            }
            qt.insert_at(p.x, p.y, i);
        }

        // The "mouse" sweeps across the canvas.
        let cursor = Point::new(100.0 + 80.0 * frame as f64, HEIGHT / 2.0);
        let mut out = Vec::new();
        let stats = qt.query_with_stats(&Region::centered_at(cursor, 100.0), &mut out);
        println!(
            "frame {frame}: {} points under cursor, visited {} of {} nodes, tested {} points",
            out.len(),
            stats.nodes_visited,
            qt.node_count(),
            stats.points_tested,
        );
    }
}
