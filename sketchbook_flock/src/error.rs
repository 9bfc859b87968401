// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flock error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a simulation configuration.
#[derive(Debug, Error)]
pub enum FlockError {
    /// The config file exists but could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`FlockConfig`](crate::FlockConfig).
    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    /// A config value is out of range.
    #[error("invalid config: `{field}` {reason}")]
    InvalidConfig {
        /// Dotted name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}
