//! Randomness used to place particles at construction time.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform random floats in `[0, 1)`.
///
/// Construction is the only consumer; ticking is deterministic.
pub trait RandomSource {
    /// Draws the next uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Returns a reproducible generator for `seed`.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
