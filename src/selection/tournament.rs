use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::solution::Solution;

/// A selection strategy that picks parents through tournaments.
///
/// A tournament draws `tournament_size` distinct solutions of the generation
/// uniformly at random and crowns the fittest of them. Ties go to the
/// competitor drawn first.
///
/// Smaller tournaments favour exploration, larger ones exploitation: a
/// tournament of size 1 is a uniform random pick.
///
/// Tournaments work on indices into the generation, which is how two parents
/// are told apart: the same index can never be both parents of one mating,
/// while two different solutions with identical bits can.
///
/// # Examples
///
/// ```
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::selection::TournamentSelection;
/// use bitga::solution::Solution;
///
/// let count_ones = |bits: &[bool]| bits.iter().filter(|bit| **bit).count() as f64;
/// let generation: Vec<Solution> = [[false, false], [true, false], [true, true]]
///     .into_iter()
///     .map(|bits| Solution::evaluate(bits.to_vec(), &count_ones).unwrap())
///     .collect();
///
/// let selection = TournamentSelection::new(2).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// // The fittest solution sits out this tournament
/// let competitors = selection.draw(&generation, Some(2), &mut rng).unwrap();
/// let winner = selection.winner(&generation, &competitors).unwrap();
///
/// assert_ne!(winner, 2);
/// assert!(competitors.contains(&winner));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::InvalidConfiguration(
                "Tournament size must be at least 1!".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Draws the competitors of one tournament, without replacement.
    ///
    /// `excluded` removes one index from the draw; it is used when a
    /// tournament has to be re-run because it crowned the first parent again.
    ///
    /// # Errors
    ///
    /// Returns an error if the generation is empty or has fewer eligible
    /// solutions than the tournament size.
    pub fn draw(
        &self,
        generation: &[Solution],
        excluded: Option<usize>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        if generation.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let eligible: Vec<usize> = (0..generation.len())
            .filter(|index| Some(*index) != excluded)
            .collect();

        if eligible.len() < self.tournament_size {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Tournament size ({}) exceeds the number of eligible solutions ({})",
                self.tournament_size,
                eligible.len()
            )));
        }

        Ok(rng.sample_without_replacement(&eligible, self.tournament_size))
    }

    /// Returns the index of the fittest competitor, the first one drawn on ties.
    ///
    /// Returns `None` when there are no competitors.
    pub fn winner(&self, generation: &[Solution], competitors: &[usize]) -> Option<usize> {
        let (&first, rest) = competitors.split_first()?;

        let winner = rest.iter().fold(first, |best, &challenger| {
            if generation[challenger].fitness > generation[best].fitness {
                challenger
            } else {
                best
            }
        });

        Some(winner)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}
