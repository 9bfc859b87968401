// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single boid and its steering behaviors.

use kurbo::{Point, Vec2};
use rand::Rng;
use sketchbook_quadtree::Region;

use crate::config::{BoidConfig, WeightConfig};

/// A flocking agent.
///
/// Size-derived distances follow the radius: boids keep `4 r` apart, react to
/// neighbors within `10 r`, and look for candidates in a square of half-extent `20 r`.
#[derive(Clone, Debug, PartialEq)]
pub struct Boid {
    /// Position on the canvas.
    pub position: Point,
    /// Velocity per frame.
    pub velocity: Vec2,
    /// Accumulated acceleration for the current frame.
    pub acceleration: Vec2,
    /// Mass; forces are divided by it.
    pub mass: f64,
    /// Body radius, `mass / 5`.
    pub radius: f64,
    /// Speed limit.
    pub max_speed: f64,
    /// Limit on separation and alignment steering.
    pub max_force: f64,
}

impl Boid {
    /// Create a boid with zero acceleration.
    pub fn new(position: Point, velocity: Vec2, mass: f64, max_speed: f64, max_force: f64) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            mass,
            radius: mass / 5.0,
            max_speed,
            max_force,
        }
    }

    /// Spawn a boid with random position, velocity and mass.
    ///
    /// An empty or inverted range yields its lower bound instead of sampling.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &BoidConfig, width: f64, height: f64) -> Self {
        let position = Point::new(sample(rng, 0.0, width), sample(rng, 0.0, height));
        let mv = config.max_speed;
        let velocity = Vec2::new(sample(rng, -mv, mv), sample(rng, -mv, mv));
        let mass = sample(rng, config.min_mass, config.max_mass);
        Self::new(position, velocity, mass, config.max_speed, config.max_force)
    }

    /// Distance below which neighbors push this boid away.
    pub fn desired_separation(&self) -> f64 {
        self.radius * 4.0
    }

    /// Distance within which neighbors affect heading and cohesion.
    pub fn neighbor_distance(&self) -> f64 {
        self.radius * 10.0
    }

    /// Square region searched for neighbor candidates.
    pub fn neighborhood(&self) -> Region {
        Region::centered_at(self.position, self.radius * 20.0)
    }

    /// Weighted sum of separation, alignment and cohesion over `neighbors`.
    ///
    /// `neighbors` must not include this boid.
    pub fn flocking_force(&self, neighbors: &[&Self], weights: &WeightConfig) -> Vec2 {
        self.separate(neighbors) * weights.separation
            + self.align(neighbors) * weights.alignment
            + self.cohere(neighbors) * weights.cohesion
    }

    /// Steer away from neighbors closer than [`Boid::desired_separation`],
    /// weighting each by inverse distance.
    pub fn separate(&self, neighbors: &[&Self]) -> Vec2 {
        let limit_d = self.desired_separation();
        let mut sum = Vec2::ZERO;
        let mut count = 0_usize;
        for other in neighbors {
            let d = self.position.distance(other.position);
            // Coincident boids give no direction to flee in.
            if d > 0.0 && d < limit_d {
                sum += (self.position - other.position) / (d * d);
                count += 1;
            }
        }
        if count == 0 {
            return Vec2::ZERO;
        }
        let desired = with_length(sum / count as f64, self.max_speed);
        limit(desired - self.velocity, self.max_force)
    }

    /// Steer toward the average heading of neighbors within [`Boid::neighbor_distance`].
    pub fn align(&self, neighbors: &[&Self]) -> Vec2 {
        let limit_d = self.neighbor_distance();
        let mut sum = Vec2::ZERO;
        let mut count = 0_usize;
        for other in neighbors {
            if self.position.distance(other.position) < limit_d {
                sum += other.velocity;
                count += 1;
            }
        }
        if count == 0 {
            return Vec2::ZERO;
        }
        let desired = with_length(sum / count as f64, self.max_speed);
        limit(desired - self.velocity, self.max_force)
    }

    /// Steer toward the center of neighbors within [`Boid::neighbor_distance`].
    pub fn cohere(&self, neighbors: &[&Self]) -> Vec2 {
        let limit_d = self.neighbor_distance();
        let mut sum = Vec2::ZERO;
        let mut count = 0_usize;
        for other in neighbors {
            if self.position.distance(other.position) < limit_d {
                sum += other.position.to_vec2();
                count += 1;
            }
        }
        if count == 0 {
            return Vec2::ZERO;
        }
        self.seek((sum / count as f64).to_point())
    }

    /// Steering that turns the velocity toward `target` at full speed.
    ///
    /// Not limited by `max_force`.
    pub fn seek(&self, target: Point) -> Vec2 {
        with_length(target - self.position, self.max_speed) - self.velocity
    }

    /// Accumulate a force, scaled by inverse mass.
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force / self.mass;
    }

    /// Integrate one frame and wrap around a `width` x `height` canvas.
    pub fn update(&mut self, width: f64, height: f64) {
        self.velocity = limit(self.velocity + self.acceleration, self.max_speed);
        self.position += self.velocity;
        self.wrap(width, height);
        self.acceleration = Vec2::ZERO;
    }

    /// Leaving by more than one radius on one side re-enters on the other.
    fn wrap(&mut self, width: f64, height: f64) {
        let r = self.radius;
        let p = &mut self.position;
        if p.x < -r {
            p.x = width + r;
        }
        if p.x > width + r {
            p.x = -r;
        }
        if p.y < -r {
            p.y = height + r;
        }
        if p.y > height + r {
            p.y = -r;
        }
    }
}

/// Uniform in `[lo, hi)`, or `lo` when that range is empty.
fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi { rng.random_range(lo..hi) } else { lo }
}

/// Scale `v` to `len`; the zero vector stays zero.
fn with_length(v: Vec2, len: f64) -> Vec2 {
    let l = v.length();
    if l > 0.0 { v * (len / l) } else { Vec2::ZERO }
}

/// Clamp the magnitude of `v` to `max`.
fn limit(v: Vec2, max: f64) -> Vec2 {
    let l = v.length();
    if l > max { v * (max / l) } else { v }
}
