// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quad-tree basics.
//!
//! Insert a handful of points, watch the root subdivide, query a window, clear.
//!
//! Run:
//! - `cargo run -p sketchbook_demos --example quadtree_basics`

use kurbo::Rect;
use sketchbook_quadtree::{QuadTree, Quadrant, Region};

fn main() {
    // A 1000x1000 canvas, four points per leaf.
    let mut qt = QuadTree::new(Region::new(500.0, 500.0, 500.0, 500.0), 4);
    for (i, (x, y)) in [(10.0, 10.0), (20.0, 20.0), (30.0, 30.0), (40.0, 40.0), (990.0, 990.0)]
        .into_iter()
        .enumerate()
    {
        let accepted = qt.insert_at(x, y, i);
        println!("insert ({x}, {y}) -> {accepted}, divided: {}", qt.is_divided());
    }

    // The root's own center sits on both midlines and lands in the south-east quadrant.
    qt.insert_at(500.0, 500.0, 5);
    let se = qt.child(Quadrant::SouthEast).unwrap();
    println!("south-east holds {:?}", se.points().iter().map(|p| p.payload).collect::<Vec<_>>());

    // Outside the root (the right edge is exclusive): rejected.
    println!("insert (1000, 10) -> {}", qt.insert_at(1000.0, 10.0, 6));

    let window = Region::from(Rect::new(0.0, 0.0, 35.0, 35.0));
    let hits: Vec<_> = qt.query(&window).into_iter().map(|p| (p.x, p.y)).collect();
    println!("points in {window:?}: {hits:?}");

    for (region, depth) in qt.regions() {
        println!("{:indent$}{:?}", "", Rect::from(region), indent = 2 * depth as usize);
    }

    qt.clear();
    println!("after clear: {} points, {} node(s)", qt.len(), qt.node_count());
}
