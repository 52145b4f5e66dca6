use crate::error::{GeneticError, OptionExt, Result};
use crate::solution::Solution;

/// A selection strategy that selects the best solutions based on fitness.
///
/// This strategy sorts the generation by fitness, highest first, and copies
/// the top N solutions. The sort is stable, so equally fit solutions keep
/// their order in the generation.
///
/// The selected solutions are clones. Elites are placed into the next
/// generation while the current one is still in use, and nothing that happens
/// to them there may leak back.
///
/// # Examples
///
/// ```
/// use bitga::selection::ElitistSelection;
/// use bitga::solution::Solution;
///
/// let generation = vec![
///     Solution { bits: vec![true, false], fitness: 1.0 },
///     Solution { bits: vec![true, true], fitness: 2.0 },
///     Solution { bits: vec![false, false], fitness: 0.0 },
/// ];
///
/// let elites = ElitistSelection.select(&generation, 2);
/// assert_eq!(elites[0].fitness, 2.0);
/// assert_eq!(elites[1].fitness, 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    /// Returns copies of the `count` fittest solutions, fittest first.
    ///
    /// Returns the whole generation, sorted, if it has fewer than `count`
    /// solutions.
    pub fn select(&self, generation: &[Solution], count: usize) -> Vec<Solution> {
        let mut ranked: Vec<&Solution> = generation.iter().collect();
        ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

        ranked.into_iter().take(count).cloned().collect()
    }

    /// Returns a copy of the fittest solution.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` for an empty generation.
    pub fn best(&self, generation: &[Solution]) -> Result<Solution> {
        self.select(generation, 1)
            .into_iter()
            .next()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(bits: &[u8], fitness: f64) -> Solution {
        Solution {
            bits: bits.iter().map(|bit| *bit == 1).collect(),
            fitness,
        }
    }

    #[test]
    fn test_select_sorts_descending() {
        let generation = vec![
            solution(&[0, 0], 0.5),
            solution(&[0, 1], 0.8),
            solution(&[1, 0], 0.3),
            solution(&[1, 1], 0.9),
        ];

        let elites = ElitistSelection.select(&generation, 3);

        assert_eq!(elites.len(), 3);
        assert_eq!(elites[0], generation[3]);
        assert_eq!(elites[1], generation[1]);
        assert_eq!(elites[2], generation[0]);
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let generation = vec![
            solution(&[0, 0], 1.0),
            solution(&[0, 1], 2.0),
            solution(&[1, 0], 2.0),
        ];

        let elites = ElitistSelection.select(&generation, 2);

        assert_eq!(elites[0].bits, vec![false, true]);
        assert_eq!(elites[1].bits, vec![true, false]);
    }

    #[test]
    fn test_select_zero_and_too_many() {
        let generation = vec![solution(&[1], 1.0), solution(&[0], 0.0)];

        assert!(ElitistSelection.select(&generation, 0).is_empty());
        assert_eq!(ElitistSelection.select(&generation, 10).len(), 2);
    }

    #[test]
    fn test_elites_are_copies() {
        let generation = vec![solution(&[1, 1], 2.0)];

        let mut elites = ElitistSelection.select(&generation, 1);
        elites[0].bits[0] = false;

        assert_eq!(generation[0].bits, vec![true, true]);
    }

    #[test]
    fn test_best() {
        let generation = vec![solution(&[0], -1.0), solution(&[1], 4.0)];

        assert_eq!(ElitistSelection.best(&generation).unwrap().fitness, 4.0);
        assert!(matches!(
            ElitistSelection.best(&[]),
            Err(GeneticError::EmptyPopulation)
        ));
    }
}
