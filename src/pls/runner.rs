//! Pareto Local Search execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the seeds (or draw random solutions until one is feasible)
//! 2. `archive := seeds`, `frontier := seeds`
//! 3. While the frontier is non-empty and budget remains:
//!    a. Draw a frontier member uniformly at random
//!    b. Evaluate every neighbour of its move set, in order
//!    c. Offer each neighbour to the archive; accepted ones join the frontier
//!    d. Remove the candidate from the frontier
//! 4. Stop at a Pareto local optimum (empty frontier) or when the budget runs out
//!
//! # Reference
//!
//! Paquete, L., Chiarandini, M. & Stützle, T. (2004). "Pareto Local Optimum
//! Sets in the Biobjective Traveling Salesman Problem", *Metaheuristics for
//! Multiobjective Optimisation*, LNEMS 535, 177-199.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::config::PlsConfig;
use crate::error::ConfigError;
use crate::neighborhood::NeighborhoodPolicy;
use crate::pareto::{ConstrainedDominance, DominanceComparator, MemberId, ParetoArchive};
use crate::problem::{MoProblem, Solution};
use crate::search::engine::{check_seeds, SearchCore};
use crate::search::{run_repeated, Monitor, ParetoResult, SearchSnapshot, SearchState};

/// Pareto Local Search engine.
///
/// Owns all run state: archive, explore frontier, move-set cache and
/// PRNG. Nothing is shared between instances, so independent runs may
/// execute on separate threads.
///
/// # Examples
///
/// ```
/// use u_pareto::neighborhood::BitFlip;
/// use u_pareto::pls::{Pls, PlsConfig};
/// use u_pareto::problem::{Knapsack, Solution};
///
/// let kp = Knapsack::new(
///     vec![2.0, 3.0, 4.0],
///     vec![vec![3.0, 4.0, 2.0], vec![4.0, 3.0, 9.0]],
///     5.0,
/// ).unwrap();
///
/// let mut pls = Pls::new(&kp, &BitFlip, PlsConfig::default().with_seed(1))
///     .unwrap()
///     .with_seeds(vec![Solution::new(vec![false; 3], 2, 1)])
///     .unwrap();
///
/// let result = pls.run();
/// assert!(!result.front.is_empty());
/// assert!(result.front.iter().all(|s| s.is_feasible()));
/// ```
pub struct Pls<'a, P: MoProblem, N, D = ConstrainedDominance> {
    core: SearchCore<'a, P, N, D>,
    config: PlsConfig,
    seeds: Option<Vec<Solution<P::Variable>>>,
    initial: Vec<Solution<P::Variable>>,
    monitor: Option<Monitor<'a, P::Variable, D>>,
}

impl<'a, P, N> Pls<'a, P, N>
where
    P: MoProblem,
    N: NeighborhoodPolicy<P::Variable>,
{
    /// Creates an engine using [`ConstrainedDominance`].
    pub fn new(problem: &'a P, policy: &'a N, config: PlsConfig) -> Result<Self, ConfigError> {
        Self::with_comparator(problem, policy, ConstrainedDominance, config)
    }
}

impl<'a, P, N, D> Pls<'a, P, N, D>
where
    P: MoProblem,
    N: NeighborhoodPolicy<P::Variable>,
    D: DominanceComparator + Clone,
{
    /// Algorithm name.
    pub const NAME: &'static str = "PLS";

    /// Creates an engine with a custom dominance comparator.
    pub fn with_comparator(
        problem: &'a P,
        policy: &'a N,
        comparator: D,
        config: PlsConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            core: SearchCore::new(problem, policy, comparator),
            config,
            seeds: None,
            initial: Vec::new(),
            monitor: None,
        })
    }

    /// Starts every run from these solutions instead of a random feasible one.
    pub fn with_seeds(mut self, seeds: Vec<Solution<P::Variable>>) -> Result<Self, ConfigError> {
        check_seeds(self.core.problem, &seeds)?;
        self.seeds = Some(seeds);
        Ok(self)
    }

    /// Installs a callback invoked after each processed candidate.
    pub fn with_monitor<F>(mut self, monitor: F) -> Self
    where
        F: FnMut(&SearchSnapshot<'_, P::Variable, D>) + 'a,
    {
        self.monitor = Some(Box::new(monitor));
        self
    }

    /// Runs the search from scratch and returns the final front.
    pub fn run(&mut self) -> ParetoResult<P::Variable> {
        self.run_with_cancel(None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked before each candidate. Once set, the run
    /// stops and returns the archive as it stands.
    pub fn run_with_cancel(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> ParetoResult<P::Variable> {
        self.core.reset(self.config.max_evaluations, self.config.seed);
        self.initial = self.core.initialize(self.seeds.as_deref());

        let termination = loop {
            if let Some(reason) = self.core.stop_reason(cancel.as_deref()) {
                break reason;
            }

            log::debug!(
                "explore list size: {}; evaluations: {}; archive size: {}",
                self.core.frontier.len(),
                self.core.budget.used(),
                self.core.archive.len()
            );

            let id = self.core.frontier.sample(&mut self.core.rng);
            self.explore(id);

            if let Some(monitor) = self.monitor.as_mut() {
                monitor(&self.core.snapshot(None));
            }
        };

        self.core.finish(Self::NAME, termination)
    }

    /// Evaluates the whole move set of one candidate, stopping early only
    /// when the budget runs out, then retires the candidate.
    fn explore(&mut self, id: MemberId) {
        let candidate = self.core.candidate(id);
        let moves = self.core.move_set();

        for &mv in moves.iter() {
            let Some(neighbor) = self.core.evaluate_neighbor(&candidate, mv) else {
                break;
            };
            self.core.admit(neighbor);
        }

        self.core.frontier.remove(id);
        self.core.candidates += 1;
    }

    /// The working archive.
    pub fn archive(&self) -> &ParetoArchive<P::Variable, D> {
        &self.core.archive
    }

    /// Current archive contents (the population of a local search).
    pub fn population(&self) -> Vec<Solution<P::Variable>> {
        self.core.archive.to_vec()
    }

    /// The final (or current) front.
    pub fn result(&self) -> Vec<Solution<P::Variable>> {
        self.core.archive.to_vec()
    }

    /// Evaluated seeds of the last run.
    pub fn initial_solutions(&self) -> &[Solution<P::Variable>] {
        &self.initial
    }

    /// Members still queued for exploration.
    pub fn frontier_len(&self) -> usize {
        self.core.frontier.len()
    }

    /// Evaluations spent in the last (or current) run.
    pub fn evaluations(&self) -> usize {
        self.core.budget.used()
    }

    /// Candidates processed in the last (or current) run.
    pub fn candidates(&self) -> usize {
        self.core.candidates
    }

    /// Lifecycle state.
    pub fn state(&self) -> SearchState {
        self.core.state
    }

    /// The configuration.
    pub fn config(&self) -> &PlsConfig {
        &self.config
    }

    /// The dominance comparator.
    pub fn comparator(&self) -> &D {
        self.core.comparator()
    }

    /// Algorithm name.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Human-readable algorithm description.
    pub fn description(&self) -> &'static str {
        "Pareto Local Search"
    }
}

/// Stateless entry point mirroring the other runners.
pub struct PlsRunner;

impl PlsRunner {
    /// Runs PLS from a random feasible seed.
    pub fn run<P, N>(
        problem: &P,
        policy: &N,
        config: &PlsConfig,
    ) -> Result<ParetoResult<P::Variable>, ConfigError>
    where
        P: MoProblem,
        N: NeighborhoodPolicy<P::Variable>,
    {
        Ok(Pls::new(problem, policy, config.clone())?.run())
    }

    /// Runs PLS from the given seeds.
    pub fn run_from<P, N>(
        problem: &P,
        policy: &N,
        config: &PlsConfig,
        seeds: Vec<Solution<P::Variable>>,
    ) -> Result<ParetoResult<P::Variable>, ConfigError>
    where
        P: MoProblem,
        N: NeighborhoodPolicy<P::Variable>,
    {
        Ok(Pls::new(problem, policy, config.clone())?.with_seeds(seeds)?.run())
    }

    /// One independent run per PRNG seed, each from a random feasible start.
    ///
    /// Runs in parallel with the `parallel` feature.
    pub fn run_repeated<P, N>(
        problem: &P,
        policy: &N,
        config: &PlsConfig,
        seeds: &[u64],
    ) -> Result<Vec<ParetoResult<P::Variable>>, ConfigError>
    where
        P: MoProblem,
        N: NeighborhoodPolicy<P::Variable>,
    {
        config.validate()?;
        run_repeated(seeds, |seed| -> Result<_, ConfigError> {
            Ok(Pls::new(problem, policy, config.clone().with_seed(seed))?.run())
        })
    }
}
