//! # TuningParameters
//!
//! The `TuningParameters` struct is the raw, caller-facing configuration of a
//! solver run. Counts are accepted as floating-point numbers (they usually come
//! from sliders or other numeric inputs) and are rounded to the nearest integer
//! before validation. Validation turns them into `SolverParameters`, the
//! immutable and strongly-typed form the solver works with.
//!
//! ## Example
//!
//! ```rust
//! use bitga::options::{LogLevel, TuningParameters};
//!
//! let parameters = TuningParameters::builder()
//!     .number_of_generations(20)
//!     .population_size(6)
//!     .elitism(1)
//!     .tournament_round_size(2)
//!     .probability_of_crossover(0.9)
//!     .probability_of_mutation(0.05)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! let validated = parameters.validate().unwrap();
//! assert_eq!(validated.get_population_size(), 6);
//!
//! // Elitism has to stay below the population size
//! let invalid = TuningParameters { elitism: 6.0, ..parameters };
//! assert!(invalid.validate().is_err());
//! ```
//!
//! ## Rules
//!
//! - `elitism` must be less than `population_size`.
//! - `tournament_round_size` must be less than `population_size` and at least 1.
//! - No parameter may be negative or non-finite.
//! - `probability_of_crossover` must not exceed 1.
//! - `probability_of_mutation` must be less than 1.

use crate::error::{GeneticError, Result};

/// Controls how much of the solver's progress is logged through `tracing`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every step event is logged at `debug` level.
    Verbose,
    /// Generation replacements and the final solution are logged at `info` level.
    Minimal,
    /// Nothing is logged.
    #[default]
    None,
}

/// Raw tuning parameters of a solver run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningParameters {
    pub number_of_generations: f64,
    pub probability_of_crossover: f64,
    pub probability_of_mutation: f64,
    pub population_size: f64,
    pub elitism: f64,
    pub tournament_round_size: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub log_level: LogLevel,
}

impl TuningParameters {
    /// Returns a builder for creating a `TuningParameters` instance.
    pub fn builder() -> TuningParametersBuilder {
        TuningParametersBuilder::default()
    }

    /// Rounds the count-like fields and checks every invariant.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidConfiguration` naming the first rule the
    /// parameters violate.
    pub fn validate(&self) -> Result<SolverParameters> {
        let number_of_generations = round_count(self.number_of_generations);
        let population_size = round_count(self.population_size);
        let elitism = round_count(self.elitism);
        let tournament_round_size = round_count(self.tournament_round_size);

        let all_fields = [
            number_of_generations,
            self.probability_of_crossover,
            self.probability_of_mutation,
            population_size,
            elitism,
            tournament_round_size,
        ];

        if all_fields.iter().any(|value| !value.is_finite()) {
            return invalid("All tuning parameters must be finite numbers!");
        }
        if elitism >= population_size {
            return invalid("Elitism cannot be greater than or equal to population size!");
        }
        if tournament_round_size >= population_size {
            return invalid("Tournament size cannot be greater than or equal to population size!");
        }
        if all_fields.iter().any(|value| *value < 0.0) {
            return invalid("All tuning parameters must be positive!");
        }
        if tournament_round_size < 1.0 {
            return invalid("Tournament size must be at least 1!");
        }
        if self.probability_of_crossover > 1.0 {
            return invalid("Probability of crossover cannot be greater than 1!");
        }
        if self.probability_of_mutation >= 1.0 {
            return invalid("Probability of mutation cannot be greater than or equal to 1!");
        }

        Ok(SolverParameters {
            number_of_generations: number_of_generations as usize,
            probability_of_crossover: self.probability_of_crossover,
            probability_of_mutation: self.probability_of_mutation,
            population_size: population_size as usize,
            elitism: elitism as usize,
            tournament_round_size: tournament_round_size as usize,
            log_level: self.log_level,
        })
    }
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self {
            number_of_generations: 100.0,
            probability_of_crossover: 0.9,
            probability_of_mutation: 0.05,
            population_size: 20.0,
            elitism: 2.0,
            tournament_round_size: 3.0,
            log_level: LogLevel::None,
        }
    }
}

/// Rounds half-way values up, so `2.5` becomes `3` and `-0.5` becomes `0`.
fn round_count(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn invalid<T>(rule: &str) -> Result<T> {
    Err(GeneticError::InvalidConfiguration(rule.to_string()))
}

/// Validated, immutable parameters of a solver run.
///
/// Only obtainable through `TuningParameters::validate`, so every instance
/// satisfies the rules listed in the module documentation.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParameters {
    number_of_generations: usize,
    probability_of_crossover: f64,
    probability_of_mutation: f64,
    population_size: usize,
    elitism: usize,
    tournament_round_size: usize,
    log_level: LogLevel,
}

impl SolverParameters {
    pub fn get_number_of_generations(&self) -> usize {
        self.number_of_generations
    }

    pub fn get_probability_of_crossover(&self) -> f64 {
        self.probability_of_crossover
    }

    pub fn get_probability_of_mutation(&self) -> f64 {
        self.probability_of_mutation
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_elitism(&self) -> usize {
        self.elitism
    }

    pub fn get_tournament_round_size(&self) -> usize {
        self.tournament_round_size
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }
}

impl TryFrom<TuningParameters> for SolverParameters {
    type Error = GeneticError;

    fn try_from(parameters: TuningParameters) -> Result<Self> {
        parameters.validate()
    }
}

/// Builder for `TuningParameters`.
///
/// Provides a fluent interface; unset fields fall back to
/// `TuningParameters::default()`.
#[derive(Debug, Clone, Default)]
pub struct TuningParametersBuilder {
    number_of_generations: Option<f64>,
    probability_of_crossover: Option<f64>,
    probability_of_mutation: Option<f64>,
    population_size: Option<f64>,
    elitism: Option<f64>,
    tournament_round_size: Option<f64>,
    log_level: Option<LogLevel>,
}

impl TuningParametersBuilder {
    /// Sets the number of generations.
    pub fn number_of_generations(mut self, value: impl Into<f64>) -> Self {
        self.number_of_generations = Some(value.into());
        self
    }

    /// Sets the probability of crossover.
    pub fn probability_of_crossover(mut self, value: f64) -> Self {
        self.probability_of_crossover = Some(value);
        self
    }

    /// Sets the probability of mutation.
    pub fn probability_of_mutation(mut self, value: f64) -> Self {
        self.probability_of_mutation = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: impl Into<f64>) -> Self {
        self.population_size = Some(value.into());
        self
    }

    /// Sets the number of elites carried into each next generation.
    pub fn elitism(mut self, value: impl Into<f64>) -> Self {
        self.elitism = Some(value.into());
        self
    }

    /// Sets the number of competitors per tournament.
    pub fn tournament_round_size(mut self, value: impl Into<f64>) -> Self {
        self.tournament_round_size = Some(value.into());
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `TuningParameters` instance.
    pub fn build(self) -> TuningParameters {
        let defaults = TuningParameters::default();
        TuningParameters {
            number_of_generations: self
                .number_of_generations
                .unwrap_or(defaults.number_of_generations),
            probability_of_crossover: self
                .probability_of_crossover
                .unwrap_or(defaults.probability_of_crossover),
            probability_of_mutation: self
                .probability_of_mutation
                .unwrap_or(defaults.probability_of_mutation),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            elitism: self.elitism.unwrap_or(defaults.elitism),
            tournament_round_size: self
                .tournament_round_size
                .unwrap_or(defaults.tournament_round_size),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}
