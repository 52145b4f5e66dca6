//! # Step events
//!
//! Every step of a solver run reports what it just did as a `StepEvent`. The
//! events carry the indices and values a visualization needs; their `Display`
//! form is a short human-readable message.

use std::fmt;

use crate::solution::Solution;

/// A unit of progress reported by `GaSolver::step`.
///
/// Indices refer to positions in the solver's current generation at the time
/// the event was emitted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum StepEvent {
    /// The first generation was filled with random solutions.
    PopulationInitialized,
    /// `count` elites were copied into the next generation.
    ElitesSelected { count: usize },
    /// Matings for the current round begin.
    ProcreationTournamentStarted,
    /// The parent selection of a new mating begins.
    NewParentsIncoming,
    /// A tournament is about to draw its competitors.
    NewCompetitorsIncoming,
    /// The competitors of a tournament were drawn, in draw order.
    TournamentPlayersSelected { competitors: Vec<usize> },
    /// A tournament winner became a parent.
    ParentSelected { index: usize, fitness: f64 },
    /// The second tournament crowned the first parent again.
    ParentRejected { index: usize },
    /// Children of the selected parents are about to be born.
    NewChildrenIncoming,
    /// A child was born through crossover at `cut_point`.
    ChildBirthedWithCrossover { cut_point: usize },
    /// A child was born as a copy of parent `parent` (0 or 1).
    ChildBirthedWithoutCrossover { parent: usize },
    /// The newest child joined the mating's children.
    ChildBirthed,
    /// The newest child's bit at index `bit` was flipped.
    ChildMutated { bit: usize, fitness: f64 },
    /// The mating's children were added to the next generation.
    ProcreationFinished { children: usize },
    /// The next generation is full.
    PopulationSizeReached,
    /// The next generation replaced the current one.
    GenerationReplaced { round: usize, best_fitness: f64 },
    /// The run is over and `solution` is its result.
    SolutionSelected { solution: Solution },
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepEvent::PopulationInitialized => {
                write!(f, "Population initialized with varying individuals!")
            }
            StepEvent::ElitesSelected { .. } => write!(f, "Elites selected!"),
            StepEvent::ProcreationTournamentStarted => write!(f, "Procreation tournament started!"),
            StepEvent::NewParentsIncoming => write!(f, "New parents incoming!"),
            StepEvent::NewCompetitorsIncoming => write!(f, "New competitors incoming!"),
            StepEvent::TournamentPlayersSelected { .. } => {
                write!(f, "New tournament players selected!")
            }
            StepEvent::ParentSelected { .. } => write!(f, "New parent selected!"),
            StepEvent::ParentRejected { .. } => write!(
                f,
                "Winner of previous tournament rejected due to lack of variation!"
            ),
            StepEvent::NewChildrenIncoming => write!(f, "New children incoming!"),
            StepEvent::ChildBirthedWithCrossover { .. } => {
                write!(f, "Child being birthed with crossover!")
            }
            StepEvent::ChildBirthedWithoutCrossover { .. } => {
                write!(f, "Child being birthed without crossover!")
            }
            StepEvent::ChildBirthed => write!(f, "Child birthed!"),
            // Bits are counted from 1 in messages
            StepEvent::ChildMutated { bit, .. } => write!(f, "Child mutated at bit {}!", bit + 1),
            StepEvent::ProcreationFinished { .. } => write!(
                f,
                "Procreation finished, new children added to next generation!"
            ),
            StepEvent::PopulationSizeReached => write!(
                f,
                "Population size reached, procreation tournament finished!"
            ),
            StepEvent::GenerationReplaced { .. } => write!(f, "Current generation replaced!"),
            StepEvent::SolutionSelected { solution } => write!(
                f,
                "Last generation encountered, solution selected: {}!",
                solution
            ),
        }
    }
}
