// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless flocking.
//!
//! Runs a small flock for a few hundred frames and prints the per-frame index
//! statistics. Set `RUST_LOG=sketchbook_flock=debug` to see every step.
//!
//! Run:
//! - `cargo run -p sketchbook_demos --example flock_headless`

use rand::SeedableRng;
use rand::rngs::StdRng;
use sketchbook_flock::{Flock, FlockConfig, FlockError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FlockError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut config = FlockConfig::default();
    config.boids.count = 300;
    let mut rng = StdRng::seed_from_u64(config.run.seed);
    let mut flock = Flock::from_config(&config, &mut rng)?;

    for _ in 0..300 {
        let stats = flock.step();
        if stats.frame % 50 == 0 {
            println!(
                "frame {:>3}: {} nodes, height {}, {:.1} candidates per boid vs {} for a full scan",
                stats.frame,
                stats.tree_nodes,
                stats.tree_height,
                stats.neighbor_candidates as f64 / stats.boids as f64,
                stats.boids,
            );
        }
    }
    tracing::info!(centroid = ?flock.centroid(), "finished");
    Ok(())
}
