// Copyright 2026 the Sketchbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared point generators for the quad-tree benchmarks.

/// Xorshift generator; deterministic across runs and platforms.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seeded generator. The seed must be non-zero.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

/// `count` points uniformly spread over `[0, size) x [0, size)`.
pub fn random_points(count: usize, size: f64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| (rng.next_f64() * size, rng.next_f64() * size))
        .collect()
}

/// `n x n` points on a regular lattice with spacing `cell`, offset by half a cell.
pub fn grid_points(n: usize, cell: f64) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(((x as f64 + 0.5) * cell, (y as f64 + 0.5) * cell));
        }
    }
    out
}

/// Points gathered around `n_clusters` random centers, clamped to `[0, size)`.
pub fn clustered_points(
    n_clusters: usize,
    per_cluster: usize,
    spread: f64,
    size: f64,
) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let centers: Vec<_> = (0..n_clusters)
        .map(|_| (rng.next_f64() * size, rng.next_f64() * size))
        .collect();
    let max = size - f64::EPSILON * size;
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(((cx + dx).clamp(0.0, max), (cy + dy).clamp(0.0, max)));
        }
    }
    out
}
