// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flock: per-frame index rebuild, neighbor queries, and integration.

use kurbo::Point;
use rand::Rng;
use sketchbook_quadtree::{IndexedPoint, QuadTree, Region};
use tracing::{debug, trace};

use crate::boid::Boid;
use crate::config::{BoidConfig, FlockConfig, WeightConfig};
use crate::error::FlockError;

/// Counters for one call to [`Flock::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Frame number, starting at 1.
    pub frame: u64,
    /// Boids in the flock.
    pub boids: usize,
    /// Boids accepted by the index.
    pub indexed: usize,
    /// Boids outside the canvas (inside the wrap margin) and left out of the index.
    pub dropped: usize,
    /// Sum over boids of points returned by their neighborhood query, self included.
    pub neighbor_candidates: usize,
    /// Sum over boids of index nodes visited by their neighborhood query.
    pub nodes_visited: usize,
    /// Index nodes after the rebuild.
    pub tree_nodes: usize,
    /// Index levels after the rebuild.
    pub tree_height: u32,
}

/// A flock of boids sharing one quad-tree.
///
/// The tree's payload is the boid's slot in [`Flock::boids`]. It is rebuilt from
/// scratch at the start of every [`Flock::step`].
#[derive(Debug)]
pub struct Flock {
    boids: Vec<Boid>,
    index: QuadTree<usize>,
    weights: WeightConfig,
    width: f64,
    height: f64,
    frame: u64,
}

impl Flock {
    /// Create an empty flock on the configured canvas.
    pub fn new(config: &FlockConfig) -> Self {
        let index = QuadTree::new(config.world_region(), config.world.capacity)
            .with_max_depth(config.world.max_depth);
        Self {
            boids: Vec::new(),
            index,
            weights: config.weights.clone(),
            width: config.world.width,
            height: config.world.height,
            frame: 0,
        }
    }

    /// Validate `config`, then create a flock and spawn `config.boids.count` random boids.
    pub fn from_config<R: Rng + ?Sized>(
        config: &FlockConfig,
        rng: &mut R,
    ) -> Result<Self, FlockError> {
        config.validate()?;
        let mut flock = Self::new(config);
        flock.spawn_random(rng, &config.boids, config.boids.count);
        Ok(flock)
    }

    /// Spawn `n` boids with random position, velocity and mass.
    pub fn spawn_random<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &BoidConfig, n: usize) {
        self.boids.reserve(n);
        for _ in 0..n {
            let boid = Boid::random(rng, config, self.width, self.height);
            self.boids.push(boid);
        }
        debug!(spawned = n, total = self.boids.len(), "spawned boids");
    }

    /// Add a boid, returning its slot.
    pub fn add_boid(&mut self, boid: Boid) -> usize {
        self.boids.push(boid);
        self.boids.len() - 1
    }

    /// All boids, by slot.
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    /// The spatial index as of the last rebuild.
    pub fn index(&self) -> &QuadTree<usize> {
        &self.index
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Clear the index and insert every boid's current position.
    ///
    /// Returns the number of boids that fell outside the canvas and were not indexed.
    pub fn rebuild_index(&mut self) -> usize {
        self.index.clear();
        let mut dropped = 0;
        for (slot, boid) in self.boids.iter().enumerate() {
            if !self.index.insert(IndexedPoint::at(boid.position, slot)) {
                trace!(slot, x = boid.position.x, y = boid.position.y, "boid outside index");
                dropped += 1;
            }
        }
        dropped
    }

    /// Slots of indexed boids inside `slot`'s neighborhood, excluding `slot` itself.
    ///
    /// Reads the index as of the last rebuild.
    pub fn neighbors(&self, slot: usize) -> Vec<usize> {
        let Some(boid) = self.boids.get(slot) else {
            return Vec::new();
        };
        self.index
            .query(&boid.neighborhood())
            .into_iter()
            .map(|p| p.payload)
            .filter(|&other| other != slot)
            .collect()
    }

    /// Slots of boids inside `region`, as of the last rebuild.
    pub fn boids_in(&self, region: &Region) -> Vec<usize> {
        self.index.query(region).into_iter().map(|p| p.payload).collect()
    }

    /// Advance one frame.
    ///
    /// Rebuilds the index, computes every boid's steering from the same snapshot
    /// of positions, then integrates all boids.
    pub fn step(&mut self) -> StepStats {
        self.frame += 1;
        let dropped = self.rebuild_index();
        let mut stats = StepStats {
            frame: self.frame,
            boids: self.boids.len(),
            indexed: self.boids.len() - dropped,
            dropped,
            tree_nodes: self.index.node_count(),
            tree_height: self.index.height(),
            ..StepStats::default()
        };

        let mut hits = Vec::new();
        let mut neighbors = Vec::new();
        let mut forces = Vec::with_capacity(self.boids.len());
        for (slot, boid) in self.boids.iter().enumerate() {
            hits.clear();
            let q = self.index.query_with_stats(&boid.neighborhood(), &mut hits);
            stats.nodes_visited += q.nodes_visited;
            stats.neighbor_candidates += hits.len();

            neighbors.clear();
            neighbors.extend(
                hits.iter()
                    .filter(|p| p.payload != slot)
                    .map(|p| &self.boids[p.payload]),
            );
            forces.push(boid.flocking_force(&neighbors, &self.weights));
        }

        let (width, height) = (self.width, self.height);
        for (boid, force) in self.boids.iter_mut().zip(forces) {
            boid.apply_force(force);
            boid.update(width, height);
        }

        debug!(
            frame = stats.frame,
            indexed = stats.indexed,
            dropped = stats.dropped,
            nodes = stats.tree_nodes,
            height = stats.tree_height,
            candidates = stats.neighbor_candidates,
            "flock step"
        );
        stats
    }

    /// Center of mass of the flock, if it has any boids.
    pub fn centroid(&self) -> Option<Point> {
        if self.boids.is_empty() {
            return None;
        }
        let sum = self
            .boids
            .iter()
            .fold(kurbo::Vec2::ZERO, |acc, b| acc + b.position.to_vec2());
        Some((sum / self.boids.len() as f64).to_point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_config() -> FlockConfig {
        let mut config = FlockConfig::default();
        config.world.capacity = 4;
        config.boids.count = 150;
        config
    }

    #[test]
    fn index_neighbors_match_brute_force() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(7);
        let mut flock = Flock::from_config(&config, &mut rng).unwrap();
        assert_eq!(flock.rebuild_index(), 0, "spawned boids are all on the canvas");
        assert!(flock.index().is_divided());

        for slot in 0..flock.boids().len() {
            let window = flock.boids()[slot].neighborhood();
            let mut got = flock.neighbors(slot);
            got.sort_unstable();
            let want: Vec<usize> = flock
                .boids()
                .iter()
                .enumerate()
                .filter(|&(i, b)| i != slot && window.contains(b.position.x, b.position.y))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(got, want, "neighbors of boid {slot}");
        }
    }

    #[test]
    fn step_keeps_boids_within_wrap_margin() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(11);
        let mut flock = Flock::from_config(&config, &mut rng).unwrap();
        for _ in 0..50 {
            let stats = flock.step();
            assert_eq!(stats.boids, 150);
            assert_eq!(stats.indexed + stats.dropped, stats.boids);
            assert!(stats.neighbor_candidates >= stats.indexed, "each indexed boid finds itself");
        }
        assert_eq!(flock.frame(), 50);
        for b in flock.boids() {
            let r = b.radius;
            assert!((-r..=config.world.width + r).contains(&b.position.x), "{b:?}");
            assert!((-r..=config.world.height + r).contains(&b.position.y), "{b:?}");
            assert!(b.velocity.length() <= b.max_speed + 1e-9);
        }
    }

    #[test]
    fn lone_boid_coasts() {
        let mut flock = Flock::new(&FlockConfig::default());
        let slot = flock.add_boid(Boid::new(
            Point::new(100.0, 100.0),
            Vec2::new(1.0, 2.0),
            10.0,
            6.0,
            4.0,
        ));
        let stats = flock.step();
        assert_eq!(stats.neighbor_candidates, 1);
        assert_eq!(flock.boids()[slot].position, Point::new(101.0, 102.0));
        assert!(flock.neighbors(slot).is_empty());
    }

    #[test]
    fn crowded_pair_moves_apart() {
        let mut flock = Flock::new(&FlockConfig::default());
        let a = flock.add_boid(Boid::new(Point::new(100.0, 100.0), Vec2::ZERO, 10.0, 6.0, 4.0));
        let b = flock.add_boid(Boid::new(Point::new(105.0, 100.0), Vec2::ZERO, 10.0, 6.0, 4.0));
        flock.step();
        let boids = flock.boids();
        let d = boids[a].position.distance(boids[b].position);
        assert!(d > 5.0, "separation should outweigh cohesion, distance {d}");
        assert_eq!(flock.neighbors(a), vec![b]);
    }

    #[test]
    fn boids_in_margin_are_dropped_not_lost() {
        let mut flock = Flock::new(&FlockConfig::default());
        flock.add_boid(Boid::new(Point::new(-1.0, 50.0), Vec2::ZERO, 10.0, 6.0, 4.0));
        flock.add_boid(Boid::new(Point::new(600.0, 50.0), Vec2::ZERO, 10.0, 6.0, 4.0));
        flock.add_boid(Boid::new(Point::new(300.0, 300.0), Vec2::ZERO, 10.0, 6.0, 4.0));
        let stats = flock.step();
        assert_eq!(stats.dropped, 2);
        assert_eq!(stats.indexed, 1);
        assert_eq!(flock.boids().len(), 3);
        assert_eq!(flock.boids_in(&flock.index().boundary()), vec![2]);
    }

    #[test]
    fn same_seed_same_run() {
        let config = small_config();
        let run = || {
            let mut rng = StdRng::seed_from_u64(config.run.seed);
            let mut flock = Flock::from_config(&config, &mut rng).unwrap();
            for _ in 0..20 {
                flock.step();
            }
            flock.boids().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn from_config_rejects_degenerate_values() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut config = FlockConfig::default();
        config.boids.max_speed = 0.0;
        assert!(matches!(
            Flock::from_config(&config, &mut rng),
            Err(FlockError::InvalidConfig {
                field: "boids.max_speed",
                ..
            })
        ));
        let mut config = FlockConfig::default();
        config.world.width = 0.0;
        assert!(Flock::from_config(&config, &mut rng).is_err());
    }

    #[test]
    fn spawning_with_degenerate_ranges_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut boids = BoidConfig::default();
        boids.max_speed = 0.0;
        boids.min_mass = 20.0;
        boids.max_mass = 10.0;
        let mut config = FlockConfig::default();
        config.world.width = 0.0;
        let mut flock = Flock::new(&config);
        flock.spawn_random(&mut rng, &boids, 3);
        for b in flock.boids() {
            assert_eq!(b.position.x, 0.0);
            assert_eq!(b.velocity, Vec2::ZERO);
            assert_eq!(b.mass, 20.0);
        }
    }

    #[test]
    fn centroid_of_empty_and_pair() {
        let mut flock = Flock::new(&FlockConfig::default());
        assert_eq!(flock.centroid(), None);
        flock.add_boid(Boid::new(Point::new(0.0, 0.0), Vec2::ZERO, 10.0, 6.0, 4.0));
        flock.add_boid(Boid::new(Point::new(10.0, 20.0), Vec2::ZERO, 10.0, 6.0, 4.0));
        assert_eq!(flock.centroid(), Some(Point::new(5.0, 10.0)));
    }
}
