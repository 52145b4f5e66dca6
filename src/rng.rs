//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single random source of a solver
//! run. Every randomized decision (initial bits, tournament draws, crossover
//! and mutation coins, cut points) goes through it, so a seeded generator
//! makes a whole run, including its event trace, reproducible.
//!
//! ## Example
//!
//! ```rust
//! use bitga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let index = rng.random_index(10);
//! assert!(index < 10);
//!
//! // A probability of zero never succeeds
//! assert!(!rng.evaluate_probability(0.0));
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the
/// genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns `true` with the given probability.
    ///
    /// A uniform sample from `[0, 1)` is drawn and compared against
    /// `probability`, so `0.0` never succeeds and `1.0` always does.
    pub fn evaluate_probability(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// Returns a uniformly random index into a sequence of length `len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Returns a fair coin flip.
    pub fn random_bit(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Draws `amount` distinct elements of `pool` without replacement.
    ///
    /// The result is in draw order, which matters to callers that resolve
    /// ties by first occurrence.
    ///
    /// # Panics
    ///
    /// Panics if `amount` exceeds `pool.len()`.
    pub fn sample_without_replacement(&mut self, pool: &[usize], amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, pool.len(), amount)
            .into_iter()
            .map(|position| pool[position])
            .collect()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
