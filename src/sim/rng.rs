//! Match random number source
//!
//! Uniform integers for match parameters and ball tints. Seeded once per
//! controller; reproducible when the seed is fixed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GameConfig;

/// Seeded PCG generator that remembers its seed for logging
#[derive(Debug, Clone)]
pub struct MatchRng {
    seed: u64,
    inner: Pcg32,
}

impl MatchRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from the thread RNG, which differs on every run
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Use the configured seed, falling back to entropy
    pub fn from_config(config: &GameConfig) -> Self {
        match config.seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[lo, hi]` inclusive. A degenerate range yields `lo`.
    pub fn uniform(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        self.inner.random_range(lo..=hi)
    }
}
