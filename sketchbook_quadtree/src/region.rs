// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: regions, indexed points, and quadrants.

use kurbo::{Point, Rect};

/// Axis-aligned rectangle given by its center and half-extents.
///
/// ## Containment
///
/// [`Region::contains`] is half-open on both axes: a point is inside when
/// `min <= p < max`. Adjacent regions sharing an edge therefore never both
/// claim a point on that edge. Points on the max edges of the root region are
/// outside it.
///
/// The four quadrants of a region tile it exactly when the center and
/// half-extents are exact in binary (as with integer or power-of-two sizes).
/// Otherwise the recomputed child edges may round past the parent's midline,
/// leaving a sliver one ulp wide that no quadrant contains.
///
/// ## Intersection
///
/// [`Region::intersects`] is closed: regions that only touch along an edge
/// still intersect. Queries use it for pruning, where a false positive only
/// costs a visit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Half of the width.
    pub half_width: f64,
    /// Half of the height.
    pub half_height: f64,
}

impl Region {
    /// Create a region from its center and half-extents.
    pub const fn new(x: f64, y: f64, half_width: f64, half_height: f64) -> Self {
        Self {
            x,
            y,
            half_width,
            half_height,
        }
    }

    /// Create a region from min/max corners.
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        let half_width = 0.5 * (max_x - min_x);
        let half_height = 0.5 * (max_y - min_y);
        Self::new(min_x + half_width, min_y + half_height, half_width, half_height)
    }

    /// A square region of half-extent `half` centered on `center`.
    ///
    /// This is the usual shape of a neighborhood query around an agent.
    pub const fn centered_at(center: Point, half: f64) -> Self {
        Self::new(center.x, center.y, half, half)
    }

    /// Center point.
    pub const fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Minimum x (left).
    pub fn min_x(&self) -> f64 {
        self.x - self.half_width
    }

    /// Maximum x (right).
    pub fn max_x(&self) -> f64 {
        self.x + self.half_width
    }

    /// Minimum y (top).
    pub fn min_y(&self) -> f64 {
        self.y - self.half_height
    }

    /// Maximum y (bottom).
    pub fn max_y(&self) -> f64 {
        self.y + self.half_height
    }

    /// Full width.
    pub fn width(&self) -> f64 {
        2.0 * self.half_width
    }

    /// Full height.
    pub fn height(&self) -> f64 {
        2.0 * self.half_height
    }

    /// Whether the point lies inside this region (half-open, `min <= p < max`).
    ///
    /// NaN coordinates are never contained.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.min_x() <= x && x < self.max_x() && self.min_y() <= y && y < self.max_y()
    }

    /// Whether the indexed point lies inside this region.
    pub fn contains_point<T>(&self, p: &IndexedPoint<T>) -> bool {
        self.contains(p.x, p.y)
    }

    /// Whether two regions overlap. Touching edges count as overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.min_x() > other.max_x()
            || self.max_x() < other.min_x()
            || self.min_y() > other.max_y()
            || self.max_y() < other.min_y())
    }

    /// The child region for `quadrant` when this region is subdivided.
    ///
    /// Half-extents are halved and the center moves by the new half-extent
    /// toward the quadrant.
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        let hw = 0.5 * self.half_width;
        let hh = 0.5 * self.half_height;
        let (sx, sy) = quadrant.signs();
        Self::new(self.x + sx * hw, self.y + sy * hh, hw, hh)
    }

}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::from_min_max(rect.x0, rect.y0, rect.x1, rect.y1)
    }
}

impl From<Region> for Rect {
    fn from(region: Region) -> Self {
        Self::new(region.min_x(), region.min_y(), region.max_x(), region.max_y())
    }
}

/// A 2D coordinate paired with an opaque payload identifying its owner.
///
/// The index stores payloads as-is and never inspects them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndexedPoint<T> {
    /// Position x.
    pub x: f64,
    /// Position y.
    pub y: f64,
    /// Owner of this point (an agent handle, slot index, etc.).
    pub payload: T,
}

impl<T> IndexedPoint<T> {
    /// Create a new indexed point.
    pub const fn new(x: f64, y: f64, payload: T) -> Self {
        Self { x, y, payload }
    }

    /// Create an indexed point at a Kurbo point.
    pub const fn at(position: Point, payload: T) -> Self {
        Self::new(position.x, position.y, payload)
    }

    /// Position as a Kurbo point.
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One of the four equal sub-regions produced by subdividing a region.
///
/// Coordinates follow screen convention (y grows downward), so north is the
/// half with the smaller y.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Smaller x, smaller y.
    NorthWest = 0,
    /// Larger x, smaller y.
    NorthEast = 1,
    /// Larger x, larger y.
    SouthEast = 2,
    /// Smaller x, larger y.
    SouthWest = 3,
}

impl Quadrant {
    /// All quadrants in accept and traversal order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn signs(self) -> (f64, f64) {
        match self {
            Self::NorthWest => (-1.0, -1.0),
            Self::NorthEast => (1.0, -1.0),
            Self::SouthEast => (1.0, 1.0),
            Self::SouthWest => (-1.0, 1.0),
        }
    }
}
