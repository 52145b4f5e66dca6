//! # Population Initializer
//!
//! Produces the first generation of a run: `population_size` solutions whose
//! bits are independent fair coin flips, each scored right away.

use crate::{
    challenge::Challenge,
    error::Result,
    rng::RandomNumberGenerator,
    solution::{Generation, Solution},
};

/// Creates a generation of uniformly random solutions.
///
/// Deterministic for a seeded `rng`. Errors from the challenge are returned
/// as soon as the first failing solution is scored.
///
/// # Example
///
/// ```rust
/// use bitga::population::random_generation;
/// use bitga::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let count_ones = |bits: &[bool]| bits.iter().filter(|bit| **bit).count() as f64;
///
/// let generation = random_generation(8, 5, &count_ones, &mut rng).unwrap();
/// assert_eq!(generation.len(), 5);
/// assert!(generation.iter().all(|solution| solution.bits.len() == 8));
/// ```
pub fn random_generation<C>(
    problem_set_length: usize,
    population_size: usize,
    challenge: &C,
    rng: &mut RandomNumberGenerator,
) -> Result<Generation>
where
    C: Challenge + ?Sized,
{
    (0..population_size)
        .map(|_| {
            let bits = (0..problem_set_length).map(|_| rng.random_bit()).collect();
            Solution::evaluate(bits, challenge)
        })
        .collect()
}
