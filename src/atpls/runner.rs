//! Anytime Pareto Local Search execution engine.
//!
//! # Algorithm
//!
//! Same skeleton as PLS, with three policy axes:
//!
//! - **Selection**: which frontier member to expand next
//! - **Acceptance**: which evaluated neighbours enter the archive
//! - **Breadth**: whether a pass stops at its first acceptance
//!
//! Every evaluated solution is also offered to an external archive that
//! records the best trade-offs seen, whatever the acceptance policy
//! decided. It never feeds back into the search.
//!
//! # Reference
//!
//! Dubois-Lacoste, J., López-Ibáñez, M. & Stützle, T. (2015). "Anytime
//! Pareto local search", *European Journal of Operational Research*
//! 243(2), 369-385.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::config::{AcceptancePolicy, AtplsConfig, CandidateSelection, ExploreBreadth};
use super::selection::select;
use crate::error::ConfigError;
use crate::neighborhood::NeighborhoodPolicy;
use crate::pareto::{ConstrainedDominance, DominanceComparator, MemberId, ParetoArchive};
use crate::problem::{MoProblem, Solution};
use crate::search::engine::{check_seeds, SearchCore};
use crate::search::{run_repeated, Monitor, ParetoResult, SearchSnapshot, SearchState};

/// Anytime Pareto Local Search engine.
///
/// # Examples
///
/// ```
/// use u_pareto::atpls::{AcceptancePolicy, Atpls, AtplsConfig, ExploreBreadth};
/// use u_pareto::neighborhood::PairFlip;
/// use u_pareto::problem::Knapsack;
///
/// let kp = Knapsack::new(
///     vec![2.0, 3.0, 4.0, 5.0],
///     vec![vec![3.0, 4.0, 2.0, 5.0], vec![4.0, 3.0, 9.0, 1.0]],
///     5.0,
/// ).unwrap();
///
/// let config = AtplsConfig::default()
///     .with_acceptance(AcceptancePolicy::DominatesAny)
///     .with_breadth(ExploreBreadth::FirstThenReset)
///     .with_max_evaluations(500)
///     .with_seed(3);
///
/// let mut atpls = Atpls::new(&kp, &PairFlip, config).unwrap();
/// let result = atpls.run();
/// assert!(result.evaluations <= 500);
/// assert!(!atpls.external_archive().is_empty());
/// ```
pub struct Atpls<'a, P: MoProblem, N, D = ConstrainedDominance> {
    core: SearchCore<'a, P, N, D>,
    config: AtplsConfig,
    breadth: ExploreBreadth,
    external: ParetoArchive<P::Variable, D>,
    seeds: Option<Vec<Solution<P::Variable>>>,
    initial: Vec<Solution<P::Variable>>,
    monitor: Option<Monitor<'a, P::Variable, D>>,
}

impl<'a, P, N> Atpls<'a, P, N>
where
    P: MoProblem,
    N: NeighborhoodPolicy<P::Variable>,
{
    /// Creates an engine using [`ConstrainedDominance`].
    pub fn new(problem: &'a P, policy: &'a N, config: AtplsConfig) -> Result<Self, ConfigError> {
        Self::with_comparator(problem, policy, ConstrainedDominance, config)
    }
}

impl<'a, P, N, D> Atpls<'a, P, N, D>
where
    P: MoProblem,
    N: NeighborhoodPolicy<P::Variable>,
    D: DominanceComparator + Clone,
{
    /// Algorithm name.
    pub const NAME: &'static str = "ATPLS";

    /// Creates an engine with a custom dominance comparator.
    pub fn with_comparator(
        problem: &'a P,
        policy: &'a N,
        comparator: D,
        config: AtplsConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            external: ParetoArchive::with_comparator(comparator.clone()),
            core: SearchCore::new(problem, policy, comparator),
            breadth: config.breadth,
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
    pub fn run_with_cancel(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> ParetoResult<P::Variable> {
        self.core.reset(self.config.max_evaluations, self.config.seed);
        self.breadth = self.config.breadth;
        self.external = ParetoArchive::with_comparator(self.core.comparator().clone());

        self.initial = self.core.initialize(self.seeds.as_deref());
        for s in &self.initial {
            self.external.add(s.clone());
        }

        let selection = self.effective_selection();

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

            let id = select(selection, &self.core.frontier, &self.core.archive, &mut self.core.rng);
            self.explore(id);

            if let Some(monitor) = self.monitor.as_mut() {
                monitor(&self.core.snapshot(Some(&self.external)));
            }
        };

        self.core.finish(Self::NAME, termination)
    }

    fn effective_selection(&self) -> CandidateSelection {
        let selection = self.config.selection;
        if selection == CandidateSelection::HypervolumeGap
            && self.core.problem.num_objectives() < 2
        {
            log::warn!(
                "{}: hypervolume gap selection needs two objectives, using uniform random",
                self.core.problem.name()
            );
            return CandidateSelection::UniformRandom;
        }
        selection
    }

    /// One candidate pass: scan the move set under the acceptance and
    /// breadth policies, retire the candidate, and apply the one-time
    /// switch of `FirstThenReset`.
    fn explore(&mut self, id: MemberId) {
        let candidate = self.core.candidate(id);
        let moves = self.core.move_set();
        let stop_at_first = self.breadth.stops_at_first();

        let mut accepted = false;
        let mut nondominated = Vec::new();

        for &mv in moves.iter() {
            let Some(neighbor) = self.core.evaluate_neighbor(&candidate, mv) else {
                break;
            };
            self.external.add(neighbor.clone());

            let taken = match self.config.acceptance {
                AcceptancePolicy::FirstDominating => self.core.admit(neighbor),
                AcceptancePolicy::DominatesAny => {
                    if self.core.archive.dominates_any(&neighbor) {
                        self.core.admit(neighbor);
                        true
                    } else {
                        false
                    }
                }
                AcceptancePolicy::DominatesOrNondominated => {
                    if self.core.archive.dominates_any(&neighbor) {
                        self.core.admit(neighbor);
                        true
                    } else {
                        // Duplicates of a member are collected too; the
                        // archive rejects them on admission.
                        if !self.core.archive.is_dominated_strictly(&neighbor) {
                            nondominated.push(neighbor);
                        }
                        false
                    }
                }
            };

            if taken {
                accepted = true;
                if stop_at_first {
                    break;
                }
            }
        }

        // Only reachable under DominatesOrNondominated: nothing dominated,
        // so the archive is unchanged since each neighbour was checked.
        if !accepted && !nondominated.is_empty() {
            log::debug!("no dominating neighbour, {} non-dominated", nondominated.len());
            accepted = true;
            if stop_at_first {
                nondominated.truncate(1);
            }
            for neighbor in nondominated {
                self.core.admit(neighbor);
            }
        }

        self.core.frontier.remove(id);
        self.core.candidates += 1;

        if !accepted && self.breadth == ExploreBreadth::FirstThenReset {
            self.breadth = ExploreBreadth::All;
            self.core.frontier.reset_to(self.core.archive.ids());
            log::debug!(
                "pass accepted nothing, exploring all moves; frontier reset to {} members",
                self.core.frontier.len()
            );
        }
    }

    /// The working archive.
    pub fn archive(&self) -> &ParetoArchive<P::Variable, D> {
        &self.core.archive
    }

    /// Archive of every solution evaluated in the last run.
    pub fn external_archive(&self) -> &ParetoArchive<P::Variable, D> {
        &self.external
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

    /// Breadth currently in force; differs from the configured one after
    /// a `FirstThenReset` switch.
    pub fn breadth(&self) -> ExploreBreadth {
        self.breadth
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
    pub fn config(&self) -> &AtplsConfig {
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
        "Anytime Pareto Local Search"
    }
}

/// Stateless entry point mirroring the other runners.
pub struct AtplsRunner;

impl AtplsRunner {
    /// Runs anytime PLS from a random feasible seed.
    pub fn run<P, N>(
        problem: &P,
        policy: &N,
        config: &AtplsConfig,
    ) -> Result<ParetoResult<P::Variable>, ConfigError>
    where
        P: MoProblem,
        N: NeighborhoodPolicy<P::Variable>,
    {
        Ok(Atpls::new(problem, policy, config.clone())?.run())
    }

    /// Runs anytime PLS from the given seeds.
    pub fn run_from<P, N>(
        problem: &P,
        policy: &N,
        config: &AtplsConfig,
        seeds: Vec<Solution<P::Variable>>,
    ) -> Result<ParetoResult<P::Variable>, ConfigError>
    where
        P: MoProblem,
        N: NeighborhoodPolicy<P::Variable>,
    {
        Ok(Atpls::new(problem, policy, config.clone())?.with_seeds(seeds)?.run())
    }

    /// One independent run per PRNG seed, each from a random feasible start.
    ///
    /// Runs in parallel with the `parallel` feature.
    pub fn run_repeated<P, N>(
        problem: &P,
        policy: &N,
        config: &AtplsConfig,
        seeds: &[u64],
    ) -> Result<Vec<ParetoResult<P::Variable>>, ConfigError>
    where
        P: MoProblem,
        N: NeighborhoodPolicy<P::Variable>,
    {
        config.validate()?;
        run_repeated(seeds, |seed| -> Result<_, ConfigError> {
            Ok(Atpls::new(problem, policy, config.clone().with_seed(seed))?.run())
        })
    }
}
