//! # Error Types
//!
//! This module defines the error type shared by every part of the solver.
//! Configuration problems surface once, when a solver is constructed; fitness
//! function failures surface from whichever phase evaluated the failing bits.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bitga::error::{GeneticError, Result};
//!
//! fn check_length(length: usize) -> Result<usize> {
//!     if length == 0 {
//!         return Err(GeneticError::InvalidConfiguration(
//!             "Problem set length must be positive!".to_string(),
//!         ));
//!     }
//!     Ok(length)
//! }
//!
//! assert!(check_length(0).is_err());
//! ```
//!
//! Wrapping an error raised by a fallible fitness function:
//!
//! ```rust
//! use bitga::error::GeneticError;
//! use std::num::ParseIntError;
//!
//! let parse_failure: ParseIntError = "x".parse::<u8>().unwrap_err();
//! let error = GeneticError::fitness(parse_failure);
//! assert!(matches!(error, GeneticError::FitnessFunction(_)));
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use bitga::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[u32]) -> bitga::error::Result<u32> {
//!     scores.iter().max().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(best_score(&[]).is_err());
//! ```

use std::error::Error as StdError;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the solver.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// A tuning parameter (or the problem set length) violates an invariant.
    ///
    /// Raised once, at construction. The solver instance is unusable and the
    /// caller has to rebuild it with corrected parameters.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An error raised by the caller-supplied fitness function.
    ///
    /// The original error is kept as-is, both for `Display` and `source()`.
    #[error(transparent)]
    FitnessFunction(Box<dyn StdError + Send + Sync + 'static>),

    /// The fitness function produced NaN, which cannot be ranked.
    #[error("Invalid numeric value: fitness function returned {0}")]
    NanFitness(f64),

    /// The run was stopped by an earlier error and has no solution.
    #[error("Solver run was aborted by an earlier error")]
    Aborted,

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

impl GeneticError {
    /// Wraps an error raised by a fitness function.
    pub fn fitness<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        GeneticError::FitnessFunction(Box::new(error))
    }
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use bitga::error::{GeneticError, OptionExt};
///
/// let nothing: Option<u8> = None;
/// assert!(nothing.ok_or_else_genetic(|| GeneticError::EmptyPopulation).is_err());
/// ```
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct ScoringFailed;

    impl fmt::Display for ScoringFailed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "scoring failed")
        }
    }

    impl StdError for ScoringFailed {}

    #[test]
    fn test_fitness_error_is_transparent() {
        let error = GeneticError::fitness(ScoringFailed);
        assert_eq!(error.to_string(), "scoring failed");

        match error {
            GeneticError::FitnessFunction(inner) => {
                assert!(inner.downcast_ref::<ScoringFailed>().is_some());
            }
            _ => panic!("Expected FitnessFunction error"),
        }
    }

    #[test]
    fn test_invalid_configuration_message() {
        let error = GeneticError::InvalidConfiguration("Elitism too large".to_string());
        assert_eq!(error.to_string(), "Invalid configuration: Elitism too large");
    }

    #[test]
    fn test_option_ext() {
        let some: Option<i32> = Some(7);
        assert_eq!(
            some.ok_or_else_genetic(|| GeneticError::EmptyPopulation)
                .unwrap(),
            7
        );

        let none: Option<i32> = None;
        assert!(matches!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        ));
    }
}
