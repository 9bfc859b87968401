// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first iterators over nodes and points of a [`QuadTree`].

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::region::IndexedPoint;
use crate::tree::QuadTree;

/// Pre-order iterator over the nodes of a subtree.
///
/// Children are visited north-west, north-east, south-east, south-west.
pub struct Nodes<'a, T> {
    stack: Vec<&'a QuadTree<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(root: &'a QuadTree<T>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a QuadTree<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

impl<T> Debug for Nodes<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Nodes")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// Iterator over every point of a subtree, in node pre-order.
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
    current: core::slice::Iter<'a, IndexedPoint<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a QuadTree<T>) -> Self {
        Self {
            nodes: Nodes::new(root),
            current: core::slice::Iter::default(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a IndexedPoint<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.current.next() {
                return Some(p);
            }
            self.current = self.nodes.next()?.points().iter();
        }
    }
}

impl<T> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("nodes", &self.nodes)
            .field("remaining_in_node", &self.current.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    #[test]
    fn nodes_pre_order() {
        let mut qt = QuadTree::new(Region::new(8.0, 8.0, 8.0, 8.0), 1);
        qt.insert_at(1.0, 1.0, ());
        qt.insert_at(5.0, 5.0, ());
        // Root, then NW (divided again), its four children, then NE, SE, SW.
        let depths: Vec<u32> = qt.nodes().map(|n| n.depth()).collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 2, 2, 1, 1, 1]);
        let centers: Vec<(f64, f64)> = qt.regions().map(|(r, _)| (r.x, r.y)).collect();
        assert_eq!(centers[1], (4.0, 4.0));
        assert_eq!(centers[2], (2.0, 2.0));
        assert_eq!(centers[6], (12.0, 4.0));
    }

    #[test]
    fn iter_on_empty_tree() {
        let qt: QuadTree<u8> = QuadTree::new(Region::new(0.0, 0.0, 1.0, 1.0), 4);
        assert_eq!(qt.iter().count(), 0);
        assert_eq!(qt.nodes().count(), 1);
    }
}
