// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quad-tree node type: insertion with subdivision, range queries, and clearing.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::iter::{Iter, Nodes};
use crate::region::{IndexedPoint, Quadrant, Region};

/// Depth at which nodes stop subdividing unless overridden with
/// [`QuadTree::with_max_depth`].
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Counters collected by [`QuadTree::query_with_stats`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Nodes whose boundary intersected the query and were descended into.
    pub nodes_visited: usize,
    /// Nodes whose boundary did not intersect the query; their subtrees were skipped.
    pub nodes_pruned: usize,
    /// Points tested against the query region.
    pub points_tested: usize,
}

impl QueryStats {
    /// Total boundary intersection checks performed.
    pub fn intersection_checks(&self) -> usize {
        self.nodes_visited + self.nodes_pruned
    }
}

/// A point quad-tree over a fixed boundary.
///
/// Each node is either a leaf holding up to `capacity` points, or an internal
/// node holding no points and owning exactly four children that tile its
/// boundary (see [`Quadrant`]). A leaf becomes internal when an insert finds it
/// full; only [`QuadTree::clear`] turns it back into a leaf.
///
/// Leaves at the maximum depth never subdivide and keep any overflow, so many
/// points sharing one location cannot drive unbounded subdivision. A full leaf
/// also keeps its overflow when one of its points falls in a rounding sliver
/// that none of the would-be children contains.
///
/// The tree is meant to be rebuilt every frame: [`clear`](QuadTree::clear),
/// re-insert the current positions, then [`query`](QuadTree::query) per agent.
pub struct QuadTree<T> {
    boundary: Region,
    capacity: usize,
    depth: u32,
    max_depth: u32,
    points: Vec<IndexedPoint<T>>,
    children: Option<Box<[Self; 4]>>,
}

impl<T> QuadTree<T> {
    /// Create an empty tree covering `boundary`.
    ///
    /// `capacity` is the number of points a leaf holds before subdividing.
    /// A capacity of zero is treated as one.
    pub fn new(boundary: Region, capacity: usize) -> Self {
        Self::node(boundary, capacity.max(1), 0, DEFAULT_MAX_DEPTH)
    }

    /// Set the depth at which leaves stop subdividing. Call before inserting.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn node(boundary: Region, capacity: usize, depth: u32, max_depth: u32) -> Self {
        Self {
            boundary,
            capacity,
            depth,
            max_depth,
            points: Vec::new(),
            children: None,
        }
    }

    /// The region this node covers.
    pub fn boundary(&self) -> Region {
        self.boundary
    }

    /// Points a leaf holds before subdividing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Depth of this node; the root is at depth 0.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Depth at which leaves stop subdividing.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Whether this node has been subdivided.
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// The four children in [`Quadrant::ALL`] order, if subdivided.
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// The child covering `quadrant`, if subdivided.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// Points held directly by this node. Always empty for internal nodes.
    pub fn points(&self) -> &[IndexedPoint<T>] {
        &self.points
    }

    /// Insert a point.
    ///
    /// Returns `false` and drops the point if it lies outside this node's
    /// boundary, or if no child of a subdivided node claims it. The latter only
    /// happens when rounding leaves a sliver between two child boundaries.
    pub fn insert(&mut self, point: IndexedPoint<T>) -> bool {
        if !self.boundary.contains_point(&point) {
            return false;
        }
        self.insert_contained(point).is_ok()
    }

    /// Insert a payload at `(x, y)`. See [`QuadTree::insert`].
    pub fn insert_at(&mut self, x: f64, y: f64, payload: T) -> bool {
        self.insert(IndexedPoint::new(x, y, payload))
    }

    /// Insert every point from `points`, returning how many were accepted.
    pub fn insert_all<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = IndexedPoint<T>>,
    {
        let mut accepted = 0;
        for point in points {
            if self.insert(point) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Store a point already inside this node's boundary.
    ///
    /// Hands the point back if no child claims it.
    fn insert_contained(&mut self, point: IndexedPoint<T>) -> Result<(), IndexedPoint<T>> {
        if self.children.is_none() {
            let full = self.points.len() >= self.capacity && self.depth < self.max_depth;
            if !full || !self.subdivide(&point) {
                self.points.push(point);
                return Ok(());
            }
        }
        match self.children.as_deref_mut() {
            Some(children) => match claimant(children, &point) {
                Some(i) => children[i].insert_contained(point),
                None => Err(point),
            },
            None => Err(point),
        }
    }

    /// Split a leaf into four quadrants and move its points down.
    ///
    /// Every held point, and `incoming`, must be claimed by some child's
    /// `contains`. Otherwise the leaf is left as it is and `false` is returned;
    /// the caller keeps the overflow in the leaf.
    ///
    /// Must only be called on leaves: existing children would be discarded.
    fn subdivide(&mut self, incoming: &IndexedPoint<T>) -> bool {
        debug_assert!(self.children.is_none(), "subdivide called on an internal node");
        let depth = self.depth + 1;
        let mut children = Box::new(Quadrant::ALL.map(|q| {
            Self::node(self.boundary.quadrant(q), self.capacity, depth, self.max_depth)
        }));
        if claimant(&children, incoming).is_none() {
            return false;
        }
        let owners: Option<Vec<usize>> =
            self.points.iter().map(|p| claimant(&children, p)).collect();
        let Some(owners) = owners else {
            return false;
        };
        // A leaf holds at most `capacity` points, so no child overflows here.
        for (point, i) in self.points.drain(..).zip(owners) {
            children[i].points.push(point);
        }
        self.children = Some(children);
        true
    }

    /// Reset to an empty leaf. The boundary and capacity are kept.
    pub fn clear(&mut self) {
        self.points.clear();
        self.children = None;
    }

    /// All points inside `range`.
    ///
    /// Results come in depth-first order (this node's points, then
    /// north-west, north-east, south-east, south-west).
    pub fn query(&self, range: &Region) -> Vec<&IndexedPoint<T>> {
        let mut out = Vec::new();
        self.query_into(range, &mut out);
        out
    }

    /// Append all points inside `range` to `out`.
    pub fn query_into<'a>(&'a self, range: &Region, out: &mut Vec<&'a IndexedPoint<T>>) {
        let mut stats = QueryStats::default();
        self.query_visit(range, out, &mut stats);
    }

    /// Like [`QuadTree::query_into`], also reporting how much of the tree was touched.
    pub fn query_with_stats<'a>(
        &'a self,
        range: &Region,
        out: &mut Vec<&'a IndexedPoint<T>>,
    ) -> QueryStats {
        let mut stats = QueryStats::default();
        self.query_visit(range, out, &mut stats);
        stats
    }

    fn query_visit<'a>(
        &'a self,
        range: &Region,
        out: &mut Vec<&'a IndexedPoint<T>>,
        stats: &mut QueryStats,
    ) {
        if !self.boundary.intersects(range) {
            stats.nodes_pruned += 1;
            return;
        }
        stats.nodes_visited += 1;
        stats.points_tested += self.points.len();
        out.extend(self.points.iter().filter(|p| range.contains_point(p)));
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.query_visit(range, out, stats);
            }
        }
    }

    /// Number of points stored in this subtree.
    pub fn len(&self) -> usize {
        self.nodes().map(|n| n.points.len()).sum()
    }

    /// Whether this subtree stores no points.
    pub fn is_empty(&self) -> bool {
        self.nodes().all(|n| n.points.is_empty())
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of levels in this subtree; a lone leaf has height 1.
    pub fn height(&self) -> u32 {
        self.nodes()
            .map(|n| n.depth - self.depth + 1)
            .max()
            .unwrap_or(1)
    }

    /// Iterate over every point in this subtree, depth first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterate over every node in this subtree in pre-order
    /// (a node, then its children north-west to south-west).
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }

    /// Boundary and depth of every node, for drawing the subdivision.
    pub fn regions(&self) -> impl Iterator<Item = (Region, u32)> + '_ {
        self.nodes().map(|n| (n.boundary, n.depth))
    }
}

/// First child, in accept order, whose boundary contains `point`.
fn claimant<T>(children: &[QuadTree<T>; 4], point: &IndexedPoint<T>) -> Option<usize> {
    children
        .iter()
        .position(|c| c.boundary.contains_point(point))
}

impl<T> Extend<IndexedPoint<T>> for QuadTree<T> {
    /// Points outside the boundary are dropped.
    fn extend<I: IntoIterator<Item = IndexedPoint<T>>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T> {
    type Item = &'a IndexedPoint<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Debug for QuadTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("boundary", &self.boundary)
            .field("capacity", &self.capacity)
            .field("depth", &self.depth)
            .field("max_depth", &self.max_depth)
            .field("divided", &self.is_divided())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
