// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sketchbook Quadtree: a point quad-tree for per-frame neighbor queries.
//!
//! Simulation sketches (flocking, particle systems, point-location demos) use it to
//! avoid scanning every agent when only a local neighborhood matters.
//!
//! - Insert points carrying an arbitrary payload; full leaves subdivide into four quadrants.
//! - Query all points inside an axis-aligned [`Region`], pruning subtrees that cannot match.
//! - [`QuadTree::clear`] between frames and re-insert the current positions.
//!
//! Regions are given as center plus half-extents, in screen coordinates (y grows
//! downward), and interoperate with [`kurbo::Rect`] and [`kurbo::Point`].
//!
//! # Example
//!
//! ```rust
//! use sketchbook_quadtree::{QuadTree, Region};
//!
//! // A 1000x1000 canvas, four points per leaf.
//! let mut qt = QuadTree::new(Region::new(500.0, 500.0, 500.0, 500.0), 4);
//! for (i, (x, y)) in [(10.0, 10.0), (20.0, 20.0), (30.0, 30.0), (40.0, 40.0), (990.0, 990.0)]
//!     .into_iter()
//!     .enumerate()
//! {
//!     assert!(qt.insert_at(x, y, i));
//! }
//! assert!(qt.is_divided());
//!
//! // Points in [0, 35) x [0, 35).
//! let hits = qt.query(&Region::new(17.5, 17.5, 17.5, 17.5));
//! assert_eq!(hits.len(), 3);
//!
//! // Points outside the root are rejected, not stored.
//! assert!(!qt.insert_at(-5.0, 10.0, 99));
//!
//! // Rebuild for the next frame.
//! qt.clear();
//! assert!(qt.query(&Region::new(500.0, 500.0, 500.0, 500.0)).is_empty());
//! ```
//!
//! ## Boundaries
//!
//! [`Region::contains`] is half-open (`min <= p < max`), so a point on a dividing
//! line belongs to the east or south side. Points on the root's right or bottom
//! edge are outside. A point is only ever stored in a node whose boundary
//! contains it; children are tried in order north-west, north-east, south-east,
//! south-west and the first one that contains the point takes it.
//!
//! When the root's center or half-extents are not exact in binary, rounding can
//! leave a sliver along a midline that no child contains. A full leaf holding
//! such a point keeps it instead of subdividing, and an internal node rejects a
//! new point in the sliver (`insert` returns `false`).
//!
//! ## Depth limit
//!
//! Leaves at [`QuadTree::max_depth`] (default [`DEFAULT_MAX_DEPTH`]) keep points
//! past their capacity instead of subdividing, which bounds the tree when many
//! points share a location.
//!
//! ## Debug drawing
//!
//! [`QuadTree::regions`] walks every node's boundary and depth, which is enough to
//! draw the subdivision over a sketch.
//!
//! ```rust
//! use sketchbook_quadtree::{QuadTree, Region};
//! use kurbo::Rect;
//!
//! let mut qt = QuadTree::new(Region::from(Rect::new(0.0, 0.0, 600.0, 600.0)), 1);
//! qt.insert_at(100.0, 100.0, ());
//! qt.insert_at(500.0, 500.0, ());
//! let outlines: Vec<Rect> = qt.regions().map(|(r, _depth)| r.into()).collect();
//! assert_eq!(outlines.len(), 5);
//! assert_eq!(outlines[1], Rect::new(0.0, 0.0, 300.0, 300.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod iter;
pub mod region;
pub mod tree;

pub use iter::{Iter, Nodes};
pub use region::{IndexedPoint, Quadrant, Region};
pub use tree::{DEFAULT_MAX_DEPTH, QuadTree, QueryStats};
