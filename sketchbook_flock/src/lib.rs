// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sketchbook Flock: a headless boids simulation driven by a per-frame quad-tree.
//!
//! Each [`Flock::step`] follows the usual sketch loop:
//!
//! 1. clear the [`QuadTree`](sketchbook_quadtree::QuadTree) and insert every boid's position,
//!    with the boid's slot as payload;
//! 2. for each boid, query a square neighborhood instead of scanning the whole flock;
//! 3. steer with separation, alignment and cohesion, then integrate and wrap at the edges.
//!
//! Nothing is drawn; [`StepStats`] and `tracing` events report what happened.
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sketchbook_flock::{Flock, FlockConfig};
//!
//! let mut config = FlockConfig::default();
//! config.boids.count = 50;
//!
//! let mut rng = StdRng::seed_from_u64(config.run.seed);
//! let mut flock = Flock::from_config(&config, &mut rng)?;
//! let stats = flock.step();
//! assert_eq!(stats.boids, 50);
//! assert_eq!(stats.indexed + stats.dropped, 50);
//! # Ok::<(), sketchbook_flock::FlockError>(())
//! ```

pub mod boid;
pub mod config;
pub mod error;
pub mod flock;

pub use boid::Boid;
pub use config::FlockConfig;
pub use error::FlockError;
pub use flock::{Flock, StepStats};
