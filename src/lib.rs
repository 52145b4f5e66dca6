pub mod breeding;
pub mod caching;
pub mod challenge;
pub mod error;
pub mod options;
pub mod population;
pub mod rng;
pub mod selection;
pub mod solution;
pub mod solver;

// Re-export commonly used types for convenience
pub use challenge::Challenge;
pub use error::{GeneticError, OptionExt, Result};
pub use options::{LogLevel, SolverParameters, TuningParameters};
pub use solution::{Generation, Solution};
pub use solver::{GaSolver, GaSolverBuilder, SolverState, StepEvent};
