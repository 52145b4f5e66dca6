use tracing::trace;

use super::crossover::single_point;
use crate::{
    challenge::Challenge, error::Result, options::SolverParameters, rng::RandomNumberGenerator,
    solution::Solution,
};

/// How a child came to be.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Single-point crossover of both parents at `cut_point`.
    Crossover { cut_point: usize },
    /// A value copy of the parent at position `parent` (0 or 1) of the mating.
    Copy { parent: usize },
}

/// A child fresh out of crossover, not yet mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Birth {
    pub child: Solution,
    pub origin: Origin,
}

/// The reproduction operator.
///
/// Births children from two parents: crossover happens with probability
/// `probability_of_crossover`, otherwise the child copies one of the parents
/// at random. Each bit of a child then flips independently with probability
/// `probability_of_mutation`, and the child is rescored after every flip.
///
/// The operator is split into [`birth`](Reproduction::birth) and
/// [`mutate_next`](Reproduction::mutate_next) so a caller can interleave its
/// own work between single flips; [`procreate`](Reproduction::procreate) runs
/// a complete mating in one call.
///
/// # Example
///
/// ```rust
/// use bitga::breeding::Reproduction;
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::solution::Solution;
///
/// let count_ones = |bits: &[bool]| bits.iter().filter(|bit| **bit).count() as f64;
/// let first = Solution::evaluate(vec![true, true, false, false], &count_ones).unwrap();
/// let second = Solution::evaluate(vec![false, false, true, true], &count_ones).unwrap();
///
/// let reproduction = Reproduction::new(0.9, 0.05);
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let children = reproduction
///     .procreate([&first, &second], 2, &count_ones, &mut rng)
///     .unwrap();
///
/// assert_eq!(children.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reproduction {
    probability_of_crossover: f64,
    probability_of_mutation: f64,
}

/// Upper bound on the number of children one mating produces.
pub const CHILDREN_PER_MATING: usize = 2;

impl Reproduction {
    pub fn new(probability_of_crossover: f64, probability_of_mutation: f64) -> Self {
        Self {
            probability_of_crossover,
            probability_of_mutation,
        }
    }

    pub fn from_parameters(parameters: &SolverParameters) -> Self {
        Self::new(
            parameters.get_probability_of_crossover(),
            parameters.get_probability_of_mutation(),
        )
    }

    /// Picks a crossover cut point for sequences of length `len`.
    ///
    /// A random index into the sequence is drawn and decremented, floored at 0,
    /// so the cut point lies in `[0, len - 1)` with 0 twice as likely as the
    /// others. Returns 0 for sequences shorter than two bits.
    pub fn crossover_point(&self, len: usize, rng: &mut RandomNumberGenerator) -> usize {
        if len == 0 {
            return 0;
        }
        rng.random_index(len).saturating_sub(1)
    }

    /// Births one child of `parents`, before mutation.
    ///
    /// A copied child keeps its parent's fitness; a crossed-over child is
    /// rescored.
    pub fn birth<C>(
        &self,
        parents: [&Solution; 2],
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Birth>
    where
        C: Challenge + ?Sized,
    {
        let [first, second] = parents;

        if rng.evaluate_probability(self.probability_of_crossover) {
            let cut_point = self.crossover_point(first.len(), rng);
            let child = single_point(first, second, cut_point, challenge)?;
            trace!(cut_point, fitness = child.fitness, "child birthed with crossover");

            Ok(Birth {
                child,
                origin: Origin::Crossover { cut_point },
            })
        } else {
            let parent = rng.random_index(parents.len());
            trace!(parent, "child birthed without crossover");

            Ok(Birth {
                child: parents[parent].clone(),
                origin: Origin::Copy { parent },
            })
        }
    }

    /// Continues the mutation pass of `child` at bit `from`.
    ///
    /// Each bit from `from` on gets its own mutation draw, in order, until one
    /// flips. That bit is flipped, the child rescored, and its index returned;
    /// the pass resumes at the following bit. Returns `None` once every
    /// remaining bit has been considered.
    pub fn mutate_next<C>(
        &self,
        child: &mut Solution,
        from: usize,
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Option<usize>>
    where
        C: Challenge + ?Sized,
    {
        for index in from..child.len() {
            if rng.evaluate_probability(self.probability_of_mutation) {
                child.flip(index, challenge)?;
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Runs a whole mutation pass and returns the flipped bit indices.
    pub fn mutate<C>(
        &self,
        child: &mut Solution,
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>>
    where
        C: Challenge + ?Sized,
    {
        let mut flipped = Vec::new();
        let mut from = 0;

        while let Some(index) = self.mutate_next(child, from, challenge, rng)? {
            flipped.push(index);
            from = index + 1;
        }

        Ok(flipped)
    }

    /// Runs a complete mating: up to two children, each born and mutated.
    ///
    /// `room` is the number of places left in the next generation; no more
    /// children than that are produced.
    pub fn procreate<C>(
        &self,
        parents: [&Solution; 2],
        room: usize,
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Solution>>
    where
        C: Challenge + ?Sized,
    {
        let count = room.min(CHILDREN_PER_MATING);
        let mut children = Vec::with_capacity(count);

        for _ in 0..count {
            let Birth { mut child, .. } = self.birth(parents, challenge, rng)?;
            self.mutate(&mut child, challenge, rng)?;
            children.push(child);
        }

        Ok(children)
    }
}
