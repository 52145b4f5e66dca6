//! # GaSolver
//!
//! The generation orchestrator. A `GaSolver` runs the evolutionary loop as an
//! explicit state machine: every call to [`GaSolver::step`] performs one unit
//! of work (initializing the population, drawing a tournament, birthing a
//! child, flipping a bit, replacing a generation) and returns a [`StepEvent`]
//! describing it. All intermediate state lives in the solver, so a driver can
//! pause between steps for as long as it likes, or stop asking for steps to
//! abandon the run.
//!
//! A round seeds the next generation with elites, then repeats matings
//! (two tournaments pick two distinct parents, which birth up to two children)
//! until the next generation is full, and finally swaps it in. After the last
//! round the fittest solution of the final generation is the result.
//!
//! ## Example
//!
//! ```rust
//! use bitga::options::TuningParameters;
//! use bitga::solver::GaSolver;
//!
//! let count_ones = |bits: &[bool]| bits.iter().filter(|bit| **bit).count() as f64;
//! let parameters = TuningParameters::builder()
//!     .number_of_generations(20)
//!     .population_size(6)
//!     .elitism(1)
//!     .tournament_round_size(2)
//!     .probability_of_crossover(0.9)
//!     .probability_of_mutation(0.05)
//!     .build();
//!
//! let mut solver = GaSolver::with_seed(4, count_ones, parameters, 42).unwrap();
//!
//! // Drive the run one step at a time
//! while let Some(event) = solver.step().unwrap() {
//!     let _message = event.to_string();
//! }
//!
//! let solution = solver.solution().unwrap();
//! assert_eq!(solution.bits.len(), 4);
//! ```

pub mod builder;
pub mod events;

use std::{fmt, mem};

use tracing::{debug, error, info};

use crate::{
    breeding::{reproduction::CHILDREN_PER_MATING, Origin, Reproduction},
    challenge::Challenge,
    error::{GeneticError, OptionExt, Result},
    options::{LogLevel, SolverParameters, TuningParameters},
    population::random_generation,
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, TournamentSelection},
    solution::{Generation, Solution},
};

pub use builder::GaSolverBuilder;
pub use events::StepEvent;

/// The coarse state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// No step was taken yet.
    Uninitialized,
    /// The first generation exists and the first round has not started.
    Initialized,
    /// Tournaments are picking the parents of a mating.
    SelectingParents,
    /// Children of the selected parents are being born and mutated.
    Reproducing,
    /// The next generation is full or was just swapped in.
    GenerationComplete,
    /// The run is over, either with a solution or aborted by an error.
    Finished,
}

/// Fine-grained resumption points of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    RoundStart,
    TournamentStarted,
    Mating,
    CompetitorsIncoming { excluded: Option<usize> },
    Drawing { excluded: Option<usize> },
    Crowning,
    ChildrenIncoming,
    Birth,
    Born,
    Mutating { from: usize },
    ProcreationFinished,
    Replace,
    Conclude,
    Finished,
    Aborted,
}

/// A step-driven genetic algorithm solver for fixed-length bit sequences.
pub struct GaSolver<C>
where
    C: Challenge,
{
    problem_set_length: usize,
    challenge: C,
    parameters: SolverParameters,
    tournament: TournamentSelection,
    elitism: ElitistSelection,
    reproduction: Reproduction,
    rng: RandomNumberGenerator,
    phase: Phase,
    round: usize,
    current_generation: Generation,
    next_generation: Generation,
    current_parents: Vec<usize>,
    current_children: Vec<Solution>,
    current_competitors: Vec<usize>,
    solution: Option<Solution>,
}

impl<C> GaSolver<C>
where
    C: Challenge,
{
    /// Creates a solver seeded from system entropy.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidConfiguration` if `problem_set_length` is
    /// zero or the tuning parameters are invalid.
    pub fn new(problem_set_length: usize, challenge: C, parameters: TuningParameters) -> Result<Self> {
        Self::with_rng(
            problem_set_length,
            challenge,
            parameters,
            RandomNumberGenerator::new(),
        )
    }

    /// Creates a solver whose run is fully determined by `seed`.
    pub fn with_seed(
        problem_set_length: usize,
        challenge: C,
        parameters: TuningParameters,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(
            problem_set_length,
            challenge,
            parameters,
            RandomNumberGenerator::from_seed(seed),
        )
    }

    /// Creates a solver drawing from the given random number generator.
    pub fn with_rng(
        problem_set_length: usize,
        challenge: C,
        parameters: TuningParameters,
        rng: RandomNumberGenerator,
    ) -> Result<Self> {
        if problem_set_length == 0 {
            return Err(GeneticError::InvalidConfiguration(
                "Problem set length must be positive!".to_string(),
            ));
        }
        let parameters = parameters.validate()?;
        let tournament = TournamentSelection::new(parameters.get_tournament_round_size())?;
        let reproduction = Reproduction::from_parameters(&parameters);

        Ok(Self {
            problem_set_length,
            challenge,
            parameters,
            tournament,
            elitism: ElitistSelection,
            reproduction,
            rng,
            phase: Phase::Uninitialized,
            round: 0,
            current_generation: Vec::new(),
            next_generation: Vec::new(),
            current_parents: Vec::new(),
            current_children: Vec::new(),
            current_competitors: Vec::new(),
            solution: None,
        })
    }

    /// Returns a builder for creating a `GaSolver`.
    pub fn builder() -> GaSolverBuilder<C> {
        GaSolverBuilder::new()
    }

    /// Performs the next unit of work and returns the event describing it.
    ///
    /// Returns `Ok(None)` once the run is finished. An error aborts the run:
    /// it is returned once and every later call returns `Ok(None)`.
    pub fn step(&mut self) -> Result<Option<StepEvent>> {
        loop {
            if self.is_finished() {
                return Ok(None);
            }

            match self.advance() {
                Ok(Some(event)) => {
                    self.log(&event);
                    return Ok(Some(event));
                }
                Ok(None) => continue,
                Err(e) => {
                    if self.parameters.get_log_level() != LogLevel::None {
                        error!(round = self.round, error = %e, "solver run aborted");
                    }
                    self.phase = Phase::Aborted;
                    return Err(e);
                }
            }
        }
    }

    /// Returns an iterator over the remaining steps of the run.
    pub fn steps(&mut self) -> Steps<'_, C> {
        Steps { solver: self }
    }

    /// Runs the remaining steps and returns the solution.
    pub fn solve(&mut self) -> Result<Solution> {
        self.solve_with(|_| {})
    }

    /// Runs the remaining steps, handing every event to `observer`, and
    /// returns the solution.
    ///
    /// # Errors
    ///
    /// Returns the first error raised during the run, or
    /// `GeneticError::Aborted` if an earlier error already stopped it.
    pub fn solve_with<F>(&mut self, mut observer: F) -> Result<Solution>
    where
        F: FnMut(&StepEvent),
    {
        while let Some(event) = self.step()? {
            observer(&event);
        }

        self.solution
            .clone()
            .ok_or_else_genetic(|| GeneticError::Aborted)
    }

    fn advance(&mut self) -> Result<Option<StepEvent>> {
        let population_size = self.parameters.get_population_size();

        let phase = self.phase;
        let event = match phase {
            Phase::Uninitialized => {
                self.current_generation = random_generation(
                    self.problem_set_length,
                    population_size,
                    &self.challenge,
                    &mut self.rng,
                )?;
                self.phase = Phase::RoundStart;
                StepEvent::PopulationInitialized
            }
            Phase::RoundStart => {
                if self.round >= self.parameters.get_number_of_generations() {
                    self.phase = Phase::Conclude;
                    return Ok(None);
                }
                let elites = self
                    .elitism
                    .select(&self.current_generation, self.parameters.get_elitism());
                let count = elites.len();
                self.next_generation.extend(elites);
                self.phase = Phase::TournamentStarted;
                StepEvent::ElitesSelected { count }
            }
            Phase::TournamentStarted => {
                self.phase = Phase::Mating;
                StepEvent::ProcreationTournamentStarted
            }
            Phase::Mating => {
                if self.next_generation.len() < population_size {
                    self.current_parents.clear();
                    self.current_children.clear();
                    self.current_competitors.clear();
                    self.phase = Phase::CompetitorsIncoming { excluded: None };
                    StepEvent::NewParentsIncoming
                } else {
                    self.phase = Phase::Replace;
                    StepEvent::PopulationSizeReached
                }
            }
            Phase::CompetitorsIncoming { excluded } => {
                self.phase = Phase::Drawing { excluded };
                StepEvent::NewCompetitorsIncoming
            }
            Phase::Drawing { excluded } => {
                self.current_competitors =
                    self.tournament
                        .draw(&self.current_generation, excluded, &mut self.rng)?;
                self.phase = Phase::Crowning;
                StepEvent::TournamentPlayersSelected {
                    competitors: self.current_competitors.clone(),
                }
            }
            Phase::Crowning => self.crown()?,
            Phase::ChildrenIncoming => {
                self.phase = Phase::Birth;
                StepEvent::NewChildrenIncoming
            }
            Phase::Birth => match self.birth()? {
                Some(event) => event,
                None => return Ok(None),
            },
            Phase::Born => {
                self.phase = Phase::Mutating { from: 0 };
                StepEvent::ChildBirthed
            }
            Phase::Mutating { from } => {
                let child = self
                    .current_children
                    .last_mut()
                    .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
                match self
                    .reproduction
                    .mutate_next(child, from, &self.challenge, &mut self.rng)?
                {
                    Some(bit) => {
                        self.phase = Phase::Mutating { from: bit + 1 };
                        StepEvent::ChildMutated {
                            bit,
                            fitness: child.fitness,
                        }
                    }
                    None => {
                        self.phase = Phase::Birth;
                        return Ok(None);
                    }
                }
            }
            Phase::ProcreationFinished => {
                self.next_generation
                    .extend(self.current_children.iter().cloned());
                self.phase = Phase::Mating;
                StepEvent::ProcreationFinished {
                    children: self.current_children.len(),
                }
            }
            Phase::Replace => {
                self.current_generation = mem::take(&mut self.next_generation);
                // Indices of the old generation mean nothing in the new one
                self.current_parents.clear();
                self.current_children.clear();
                self.current_competitors.clear();
                self.round += 1;
                self.phase = Phase::RoundStart;
                StepEvent::GenerationReplaced {
                    round: self.round,
                    best_fitness: self.best_fitness(),
                }
            }
            Phase::Conclude => {
                let solution = self.elitism.best(&self.current_generation)?;
                self.solution = Some(solution.clone());
                self.phase = Phase::Finished;
                StepEvent::SolutionSelected { solution }
            }
            Phase::Finished | Phase::Aborted => return Ok(None),
        };

        Ok(Some(event))
    }

    fn crown(&mut self) -> Result<StepEvent> {
        let winner = self
            .tournament
            .winner(&self.current_generation, &self.current_competitors)
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let fitness = self.current_generation[winner].fitness;

        match self.current_parents.first() {
            None => {
                self.current_parents.push(winner);
                self.phase = Phase::CompetitorsIncoming { excluded: None };
            }
            Some(&first) if first == winner => {
                self.phase = Phase::CompetitorsIncoming {
                    excluded: Some(first),
                };
                return Ok(StepEvent::ParentRejected { index: winner });
            }
            Some(_) => {
                self.current_parents.push(winner);
                self.phase = Phase::ChildrenIncoming;
            }
        }

        Ok(StepEvent::ParentSelected {
            index: winner,
            fitness,
        })
    }

    fn birth(&mut self) -> Result<Option<StepEvent>> {
        let occupied = self.next_generation.len() + self.current_children.len();
        if self.current_children.len() >= CHILDREN_PER_MATING
            || occupied >= self.parameters.get_population_size()
        {
            self.phase = Phase::ProcreationFinished;
            return Ok(None);
        }

        let (first, second) = match self.current_parents[..] {
            [first, second] => (first, second),
            _ => return Err(GeneticError::EmptyPopulation),
        };
        let parents = [
            &self.current_generation[first],
            &self.current_generation[second],
        ];
        let birth = self
            .reproduction
            .birth(parents, &self.challenge, &mut self.rng)?;

        self.current_children.push(birth.child);
        self.phase = Phase::Born;

        Ok(Some(match birth.origin {
            Origin::Crossover { cut_point } => StepEvent::ChildBirthedWithCrossover { cut_point },
            Origin::Copy { parent } => StepEvent::ChildBirthedWithoutCrossover { parent },
        }))
    }

    fn best_fitness(&self) -> f64 {
        self.current_generation
            .iter()
            .map(|solution| solution.fitness)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    fn log(&self, event: &StepEvent) {
        match self.parameters.get_log_level() {
            LogLevel::Verbose => debug!(round = self.round, %event),
            LogLevel::Minimal => match event {
                StepEvent::GenerationReplaced {
                    round,
                    best_fitness,
                } => info!(round, best_fitness, "Generation replaced"),
                StepEvent::SolutionSelected { solution } => {
                    info!(fitness = solution.fitness, bits = %solution.bit_string(), "Solution selected")
                }
                _ => {}
            },
            LogLevel::None => {}
        }
    }

    /// Returns the coarse state of the run.
    pub fn state(&self) -> SolverState {
        match self.phase {
            Phase::Uninitialized => SolverState::Uninitialized,
            Phase::RoundStart if self.round == 0 => SolverState::Initialized,
            Phase::RoundStart | Phase::Replace | Phase::Conclude => {
                SolverState::GenerationComplete
            }
            Phase::TournamentStarted
            | Phase::Mating
            | Phase::CompetitorsIncoming { .. }
            | Phase::Drawing { .. }
            | Phase::Crowning => SolverState::SelectingParents,
            Phase::ChildrenIncoming
            | Phase::Birth
            | Phase::Born
            | Phase::Mutating { .. }
            | Phase::ProcreationFinished => SolverState::Reproducing,
            Phase::Finished | Phase::Aborted => SolverState::Finished,
        }
    }

    /// Returns `true` once the run has produced its solution or was aborted.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished | Phase::Aborted)
    }

    /// The result of the run, available once it finished successfully.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// The number of completed rounds.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn parameters(&self) -> &SolverParameters {
        &self.parameters
    }

    pub fn problem_set_length(&self) -> usize {
        self.problem_set_length
    }

    pub fn challenge(&self) -> &C {
        &self.challenge
    }

    pub fn current_generation(&self) -> &[Solution] {
        &self.current_generation
    }

    /// The partially filled generation of the round in progress.
    pub fn next_generation(&self) -> &[Solution] {
        &self.next_generation
    }

    /// Indices of the parents selected for the current mating.
    pub fn parent_indices(&self) -> &[usize] {
        &self.current_parents
    }

    pub fn current_parents(&self) -> Vec<&Solution> {
        self.current_parents
            .iter()
            .map(|index| &self.current_generation[*index])
            .collect()
    }

    /// Children of the current mating, including the one being mutated.
    pub fn current_children(&self) -> &[Solution] {
        &self.current_children
    }

    /// Indices of the competitors of the latest tournament, in draw order.
    pub fn competitor_indices(&self) -> &[usize] {
        &self.current_competitors
    }

    pub fn current_competitors(&self) -> Vec<&Solution> {
        self.current_competitors
            .iter()
            .map(|index| &self.current_generation[*index])
            .collect()
    }
}

impl<C> fmt::Debug for GaSolver<C>
where
    C: Challenge,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaSolver")
            .field("problem_set_length", &self.problem_set_length)
            .field("parameters", &self.parameters)
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("current_generation", &self.current_generation)
            .field("next_generation", &self.next_generation)
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}

/// Iterator over the remaining steps of a run, created by [`GaSolver::steps`].
///
/// Yields each event as `Ok`, an error once as `Err`, and then ends.
pub struct Steps<'a, C>
where
    C: Challenge,
{
    solver: &'a mut GaSolver<C>,
}

impl<C> Iterator for Steps<'_, C>
where
    C: Challenge,
{
    type Item = Result<StepEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        self.solver.step().transpose()
    }
}
