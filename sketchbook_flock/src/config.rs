// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulation configuration, loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sketchbook_quadtree::Region;
use tracing::info;

use crate::error::FlockError;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FlockConfig {
    /// Canvas size and index tuning.
    #[serde(default)]
    pub world: WorldConfig,
    /// Population and per-boid limits.
    #[serde(default)]
    pub boids: BoidConfig,
    /// Steering behavior weights.
    #[serde(default)]
    pub weights: WeightConfig,
    /// Headless run settings.
    #[serde(default)]
    pub run: RunConfig,
}

impl FlockConfig {
    /// Load configuration from `path`, or use defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, FlockError> {
        if !path.exists() {
            info!(path = %path.display(), "no config file found, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| FlockError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, FlockError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that would make the simulation meaningless.
    pub fn validate(&self) -> Result<(), FlockError> {
        if !(self.world.width > 0.0 && self.world.height > 0.0) {
            return invalid("world.width/height", "must be positive");
        }
        if self.world.capacity == 0 {
            return invalid("world.capacity", "must be at least 1");
        }
        if !(self.boids.min_mass > 0.0 && self.boids.min_mass <= self.boids.max_mass) {
            return invalid("boids.min_mass", "must be positive and not above boids.max_mass");
        }
        if !(self.boids.max_speed > 0.0) {
            return invalid("boids.max_speed", "must be positive");
        }
        if self.boids.max_force < 0.0 {
            return invalid("boids.max_force", "must not be negative");
        }
        Ok(())
    }

    /// Root region of the spatial index, covering `[0, width) x [0, height)`.
    pub fn world_region(&self) -> Region {
        Region::from_min_max(0.0, 0.0, self.world.width, self.world.height)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> Result<(), FlockError> {
    Err(FlockError::InvalidConfig { field, reason })
}

/// Canvas size and quad-tree tuning.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorldConfig {
    /// Canvas width.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Canvas height.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Points per quad-tree leaf before it subdivides.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Depth at which quad-tree leaves stop subdividing.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            capacity: default_capacity(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_width() -> f64 {
    600.0
}
fn default_height() -> f64 {
    600.0
}
fn default_capacity() -> usize {
    10
}
fn default_max_depth() -> u32 {
    sketchbook_quadtree::DEFAULT_MAX_DEPTH
}

/// Population and per-boid limits.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BoidConfig {
    /// Boids spawned at startup.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Lower bound of the random mass; radius is mass / 5.
    #[serde(default = "default_min_mass")]
    pub min_mass: f64,
    /// Upper bound of the random mass.
    #[serde(default = "default_max_mass")]
    pub max_mass: f64,
    /// Speed limit.
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,
    /// Steering force limit.
    #[serde(default = "default_max_force")]
    pub max_force: f64,
}

impl Default for BoidConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            min_mass: default_min_mass(),
            max_mass: default_max_mass(),
            max_speed: default_max_speed(),
            max_force: default_max_force(),
        }
    }
}

fn default_count() -> usize {
    200
}
fn default_min_mass() -> f64 {
    10.0
}
fn default_max_mass() -> f64 {
    30.0
}
fn default_max_speed() -> f64 {
    6.0
}
fn default_max_force() -> f64 {
    4.0
}

/// Steering behavior weights.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeightConfig {
    /// Weight of the force steering away from crowded neighbors.
    #[serde(default = "default_separation")]
    pub separation: f64,
    /// Weight of the force matching neighbors' heading.
    #[serde(default = "default_unit_weight")]
    pub alignment: f64,
    /// Weight of the force steering toward neighbors' center.
    #[serde(default = "default_unit_weight")]
    pub cohesion: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            separation: default_separation(),
            alignment: default_unit_weight(),
            cohesion: default_unit_weight(),
        }
    }
}

fn default_separation() -> f64 {
    2.0
}
fn default_unit_weight() -> f64 {
    1.0
}

/// Headless run settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RunConfig {
    /// Frames to simulate.
    #[serde(default = "default_frames")]
    pub frames: u64,
    /// Seed for spawning, so runs are reproducible.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Log a frame summary every this many frames (0 disables).
    #[serde(default = "default_log_every")]
    pub log_every: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            seed: default_seed(),
            log_every: default_log_every(),
        }
    }
}

fn default_frames() -> u64 {
    600
}
fn default_seed() -> u64 {
    0x5EED_F10C
}
fn default_log_every() -> u64 {
    60
}
