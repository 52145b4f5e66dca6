//! # Solution
//!
//! A `Solution` is a single candidate: a fixed-length bit sequence together
//! with its fitness. The fitness is only ever produced by the challenge, and
//! every operation that changes a bit rescores the solution before returning,
//! so the two fields never disagree.
//!
//! ## Example
//!
//! ```rust
//! use bitga::solution::Solution;
//!
//! let count_ones = |bits: &[bool]| bits.iter().filter(|bit| **bit).count() as f64;
//!
//! let mut solution = Solution::evaluate(vec![true, false, false], &count_ones).unwrap();
//! assert_eq!(solution.fitness, 1.0);
//!
//! solution.flip(1, &count_ones).unwrap();
//! assert_eq!(solution.fitness, 2.0);
//! assert_eq!(solution.to_string(), "[1,1,0] with fitness: 2");
//! ```

use std::fmt;

use crate::{
    challenge::{self, Challenge},
    error::Result,
};

/// A candidate solution.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The encoded candidate.
    pub bits: Vec<bool>,
    /// The score the challenge gave to `bits`.
    pub fitness: f64,
}

/// The population of one round.
pub type Generation = Vec<Solution>;

impl Solution {
    /// Scores `bits` and wraps them into a solution.
    pub fn evaluate<C>(bits: Vec<bool>, challenge: &C) -> Result<Self>
    where
        C: Challenge + ?Sized,
    {
        let fitness = challenge::evaluate(challenge, &bits)?;
        Ok(Self { bits, fitness })
    }

    /// Flips the bit at `index` and rescores the solution.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn flip<C>(&mut self, index: usize, challenge: &C) -> Result<()>
    where
        C: Challenge + ?Sized,
    {
        self.bits[index] = !self.bits[index];
        self.fitness = challenge::evaluate(challenge, &self.bits)?;
        Ok(())
    }

    /// Returns the number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the solution has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Formats the bits as `[1,0,1]`.
    pub fn bit_string(&self) -> String {
        let digits: Vec<&str> = self
            .bits
            .iter()
            .map(|bit| if *bit { "1" } else { "0" })
            .collect();
        format!("[{}]", digits.join(","))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with fitness: {}", self.bit_string(), self.fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;

    fn count_ones(bits: &[bool]) -> f64 {
        bits.iter().filter(|bit| **bit).count() as f64
    }

    #[test]
    fn test_evaluate_scores_bits() {
        let solution = Solution::evaluate(vec![true, true, false, true], &count_ones).unwrap();

        assert_eq!(solution.fitness, 3.0);
        assert_eq!(solution.len(), 4);
        assert!(!solution.is_empty());
    }

    #[test]
    fn test_flip_rescores() {
        let mut solution = Solution::evaluate(vec![false; 3], &count_ones).unwrap();

        solution.flip(0, &count_ones).unwrap();
        assert_eq!(solution.bits, vec![true, false, false]);
        assert_eq!(solution.fitness, 1.0);

        solution.flip(0, &count_ones).unwrap();
        assert_eq!(solution.bits, vec![false; 3]);
        assert_eq!(solution.fitness, 0.0);
    }

    #[test]
    fn test_flip_propagates_nan_fitness() {
        let picky = |bits: &[bool]| if bits[0] { f64::NAN } else { 0.0 };
        let mut solution = Solution::evaluate(vec![false, false], &picky).unwrap();

        let result = solution.flip(0, &picky);
        assert!(matches!(result, Err(GeneticError::NanFitness(_))));
    }

    #[test]
    fn test_display() {
        let solution = Solution::evaluate(vec![true, false, true, true], &count_ones).unwrap();

        assert_eq!(solution.bit_string(), "[1,0,1,1]");
        assert_eq!(solution.to_string(), "[1,0,1,1] with fitness: 3");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Solution::evaluate(vec![true, true], &count_ones).unwrap();
        let mut copy = original.clone();

        copy.flip(1, &count_ones).unwrap();

        assert_eq!(original.bits, vec![true, true]);
        assert_eq!(original.fitness, 2.0);
        assert_eq!(copy.fitness, 1.0);
    }
}
