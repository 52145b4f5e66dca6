//! # Selection
//!
//! Two ways of picking solutions out of a generation: tournaments choose the
//! parents of each mating, elitism chooses the solutions that survive into the
//! next generation unchanged.

pub mod elitist;
pub mod tournament;

pub use elitist::ElitistSelection;
pub use tournament::TournamentSelection;
