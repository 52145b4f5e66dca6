//! # Challenge
//!
//! A `Challenge` is the fitness function of a problem: it scores a bit
//! sequence, higher being better. The solver never interprets the bits
//! itself, so any combinatorial objective (item selection, feature subsets,
//! weight/value trade-offs) can be plugged in.
//!
//! Plain closures of type `Fn(&[bool]) -> f64` are challenges already. Problems
//! whose scoring can fail implement the trait directly and return
//! `GeneticError::FitnessFunction`, which the solver passes through untouched.
//!
//! ## Example
//!
//! ```rust
//! use bitga::challenge::Challenge;
//!
//! let count_ones = |bits: &[bool]| bits.iter().filter(|bit| **bit).count() as f64;
//! assert_eq!(count_ones.score(&[true, false, true]).unwrap(), 2.0);
//! ```

use crate::{
    caching::CachedChallenge,
    error::{GeneticError, Result},
};

/// Scores bit sequences.
pub trait Challenge {
    /// Returns the fitness of `bits`.
    fn score(&self, bits: &[bool]) -> Result<f64>;

    /// Wraps this challenge in a memoizing cache keyed by the bit sequence.
    fn with_cache(self) -> CachedChallenge<Self>
    where
        Self: Sized,
    {
        CachedChallenge::new(self)
    }
}

impl<F> Challenge for F
where
    F: Fn(&[bool]) -> f64,
{
    fn score(&self, bits: &[bool]) -> Result<f64> {
        Ok(self(bits))
    }
}

/// Scores `bits`, rejecting NaN.
///
/// Infinite scores are kept: `-inf` is a common penalty for infeasible
/// candidates and ranks below every other score.
pub(crate) fn evaluate<C>(challenge: &C, bits: &[bool]) -> Result<f64>
where
    C: Challenge + ?Sized,
{
    let score = challenge.score(bits)?;
    if score.is_nan() {
        return Err(GeneticError::NanFitness(score));
    }
    Ok(score)
}
