// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless flocking run.
//!
//! Usage: `flock [config.toml]` (defaults to `flock.toml`; missing file uses defaults).
//! Set `RUST_LOG=sketchbook_flock=debug` for per-frame output.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sketchbook_flock::{Flock, FlockConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("flock.toml"));
    let config = FlockConfig::load(&path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    info!("Sketchbook flock v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "  Canvas: {}x{}, leaf capacity {}",
        config.world.width, config.world.height, config.world.capacity
    );
    info!(
        "  Boids: {}, frames: {}, seed: {:#x}",
        config.boids.count, config.run.frames, config.run.seed
    );

    let mut rng = StdRng::seed_from_u64(config.run.seed);
    let mut flock = Flock::from_config(&config, &mut rng)?;

    let started = Instant::now();
    let mut candidates = 0_usize;
    let mut dropped = 0_usize;
    for _ in 0..config.run.frames {
        let stats = flock.step();
        candidates += stats.neighbor_candidates;
        dropped += stats.dropped;
        if config.run.log_every > 0 && stats.frame % config.run.log_every == 0 {
            info!(
                frame = stats.frame,
                nodes = stats.tree_nodes,
                height = stats.tree_height,
                avg_candidates = stats.neighbor_candidates as f64 / stats.boids.max(1) as f64,
                "frame"
            );
        }
    }

    let elapsed = started.elapsed();
    let frames = config.run.frames.max(1);
    info!(
        frames = config.run.frames,
        ms_per_frame = elapsed.as_secs_f64() * 1000.0 / frames as f64,
        avg_candidates = candidates as f64 / (frames as f64 * config.boids.count.max(1) as f64),
        dropped,
        "done"
    );
    if let Some(c) = flock.centroid() {
        info!("  Final centroid: ({:.1}, {:.1})", c.x, c.y);
    }
    Ok(())
}
