//! # Breeding
//!
//! The reproduction operator: single-point crossover of two parents followed
//! by a per-bit mutation pass. Children are always fresh values; parents are
//! only ever read.
pub mod crossover;
pub mod reproduction;

pub use crossover::single_point;
pub use reproduction::{Birth, Origin, Reproduction};
