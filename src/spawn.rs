//! Spawn context for randomized descriptor generation.
//!
//! Every generated thing in the greeting — burst sparks, ambient hearts —
//! draws its parameters from a `SpawnContext`. The context wraps the RNG so
//! generators stay pure functions of (config, context) and can be driven by
//! a fixed seed in tests.
//!
//! ```ignore
//! let mut ctx = SpawnContext::new(0);
//! let angle = ctx.random_angle();
//! let radius = ctx.random_range(350.0, 550.0);
//! let color = *ctx.pick(&[HeartColor::Pink, HeartColor::Rose]);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Random-draw helper handed to spawn-time generators.
///
/// Seeded per batch: different each program execution, reproducible within a
/// run for a given batch index. Tests use [`SpawnContext::from_seed`] for
/// fully deterministic draws.
pub struct SpawnContext {
    /// Index of the batch being generated (explosion id, or 0 for static batches).
    pub batch: u64,
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context for the given batch index.
    pub fn new(batch: u64) -> Self {
        let seed = batch
            ^ std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42);

        Self {
            batch,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create a fully deterministic context from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            batch: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max)`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random angle in `[0, 2π)` radians.
    #[inline]
    pub fn random_angle(&mut self) -> f32 {
        self.rng.gen_range(0.0..TAU)
    }

    /// Random value centered on zero: `[-half, half)`.
    #[inline]
    pub fn random_spread(&mut self, half: f32) -> f32 {
        self.rng.gen_range(-half..half)
    }

    /// Pick a uniformly random element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, options: &'a [T]) -> &'a T {
        &options[self.rng.gen_range(0..options.len())]
    }
}
