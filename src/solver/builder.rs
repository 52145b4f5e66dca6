use crate::{
    challenge::Challenge,
    error::{GeneticError, Result},
    options::TuningParameters,
    rng::RandomNumberGenerator,
};

use super::GaSolver;

/// Fluent construction of a [`GaSolver`].
///
/// The problem set length and the challenge are required; the tuning
/// parameters default to `TuningParameters::default()` and the random number
/// generator to one seeded from system entropy.
///
/// # Example
///
/// ```rust
/// use bitga::options::TuningParameters;
/// use bitga::solver::GaSolver;
///
/// let count_ones = |bits: &[bool]| bits.iter().filter(|bit| **bit).count() as f64;
///
/// let mut solver = GaSolver::builder()
///     .with_problem_set_length(8)
///     .with_challenge(count_ones)
///     .with_tuning_parameters(TuningParameters::default())
///     .with_seed(7)
///     .build()
///     .unwrap();
///
/// let solution = solver.solve().unwrap();
/// assert_eq!(solution.bits.len(), 8);
/// ```
pub struct GaSolverBuilder<C>
where
    C: Challenge,
{
    problem_set_length: Option<usize>,
    challenge: Option<C>,
    tuning_parameters: Option<TuningParameters>,
    rng: Option<RandomNumberGenerator>,
}

impl<C> GaSolverBuilder<C>
where
    C: Challenge,
{
    pub fn new() -> Self {
        Self {
            problem_set_length: None,
            challenge: None,
            tuning_parameters: None,
            rng: None,
        }
    }

    pub fn with_problem_set_length(mut self, problem_set_length: usize) -> Self {
        self.problem_set_length = Some(problem_set_length);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn with_tuning_parameters(mut self, tuning_parameters: TuningParameters) -> Self {
        self.tuning_parameters = Some(tuning_parameters);
        self
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(RandomNumberGenerator::from_seed(seed))
    }

    pub fn build(self) -> Result<GaSolver<C>> {
        let problem_set_length = self.problem_set_length.ok_or_else(|| {
            GeneticError::InvalidConfiguration("Problem set length not specified".to_string())
        })?;

        let challenge = self.challenge.ok_or_else(|| {
            GeneticError::InvalidConfiguration("Challenge not specified".to_string())
        })?;

        GaSolver::with_rng(
            problem_set_length,
            challenge,
            self.tuning_parameters.unwrap_or_default(),
            self.rng.unwrap_or_default(),
        )
    }
}

impl<C> Default for GaSolverBuilder<C>
where
    C: Challenge,
{
    fn default() -> Self {
        Self::new()
    }
}
