//! State and steps shared by the PLS and anytime PLS engines.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::budget::EvaluationBudget;
use super::frontier::ExploreFrontier;
use super::types::{ParetoResult, SearchSnapshot, SearchState, Termination};
use crate::error::ConfigError;
use crate::neighborhood::{Move, MoveSetCache, NeighborhoodPolicy};
use crate::pareto::{DominanceComparator, MemberId, ParetoArchive};
use crate::problem::{MoProblem, Solution};

/// Everything one run owns: archive, frontier, budget, move cache and PRNG.
pub(crate) struct SearchCore<'a, P: MoProblem, N, D> {
    pub(crate) problem: &'a P,
    pub(crate) policy: &'a N,
    pub(crate) archive: ParetoArchive<P::Variable, D>,
    pub(crate) frontier: ExploreFrontier,
    pub(crate) budget: EvaluationBudget,
    pub(crate) rng: StdRng,
    pub(crate) candidates: usize,
    pub(crate) state: SearchState,
    comparator: D,
    moves: MoveSetCache,
}

impl<'a, P, N, D> SearchCore<'a, P, N, D>
where
    P: MoProblem,
    N: NeighborhoodPolicy<P::Variable>,
    D: DominanceComparator + Clone,
{
    pub(crate) fn new(problem: &'a P, policy: &'a N, comparator: D) -> Self {
        Self {
            problem,
            policy,
            archive: ParetoArchive::with_comparator(comparator.clone()),
            frontier: ExploreFrontier::new(),
            budget: EvaluationBudget::new(0),
            rng: StdRng::seed_from_u64(0),
            candidates: 0,
            state: SearchState::Initializing,
            comparator,
            moves: MoveSetCache::new(),
        }
    }

    pub(crate) fn comparator(&self) -> &D {
        &self.comparator
    }

    /// Clears all run state and reseeds the PRNG.
    pub(crate) fn reset(&mut self, max_evaluations: usize, seed: Option<u64>) {
        self.archive = ParetoArchive::with_comparator(self.comparator.clone());
        self.frontier = ExploreFrontier::new();
        self.budget = EvaluationBudget::new(max_evaluations);
        self.rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.candidates = 0;
        self.state = SearchState::Initializing;
    }

    /// Evaluates the seed set, loads it into archive and frontier, and
    /// returns the evaluated seeds.
    ///
    /// Supplied seeds are always evaluated and charged. Without seeds,
    /// random solutions are drawn until one is feasible or the budget
    /// runs out; in the latter case the least-violating draw is used.
    pub(crate) fn initialize(
        &mut self,
        seeds: Option<&[Solution<P::Variable>]>,
    ) -> Vec<Solution<P::Variable>> {
        self.state = SearchState::Initializing;

        let evaluated = match seeds {
            Some(seeds) => seeds
                .iter()
                .map(|seed| {
                    let mut s = seed.clone();
                    s.reset_evaluation();
                    self.problem.evaluate(&mut s);
                    self.budget.charge();
                    s
                })
                .collect(),
            None => self.random_feasible_seed(),
        };

        for s in &evaluated {
            self.admit(s.clone());
        }

        self.state = SearchState::Exploring;
        evaluated
    }

    fn random_feasible_seed(&mut self) -> Vec<Solution<P::Variable>> {
        let mut least_violating: Option<Solution<P::Variable>> = None;

        while self.budget.try_consume() {
            let mut s = self.problem.create_solution(&mut self.rng);
            self.problem.evaluate(&mut s);
            if s.is_feasible() {
                return vec![s];
            }
            let better = least_violating
                .as_ref()
                .map_or(true, |best| s.total_violation() < best.total_violation());
            if better {
                least_violating = Some(s);
            }
        }

        log::warn!(
            "{}: no feasible solution within {} evaluations, seeding with least violation",
            self.problem.name(),
            self.budget.used()
        );
        least_violating.into_iter().collect()
    }

    /// Offers a solution to the archive. Accepted solutions join the
    /// frontier; members it evicts leave the frontier.
    pub(crate) fn admit(&mut self, solution: Solution<P::Variable>) -> bool {
        match self.archive.admit(solution) {
            Some(admission) => {
                self.frontier.forget(&admission.evicted);
                self.frontier.push(admission.id);
                true
            }
            None => false,
        }
    }

    /// Applies and evaluates one move, or returns `None` when the budget is spent.
    pub(crate) fn evaluate_neighbor(
        &mut self,
        candidate: &Solution<P::Variable>,
        mv: Move,
    ) -> Option<Solution<P::Variable>> {
        if !self.budget.try_consume() {
            return None;
        }
        let mut neighbor = self.policy.apply_move(candidate, mv);
        self.problem.evaluate(&mut neighbor);
        Some(neighbor)
    }

    /// Copies the archive member behind a frontier id.
    ///
    /// The copy keeps the candidate available even if one of its own
    /// neighbours evicts it from the archive.
    pub(crate) fn candidate(&self, id: MemberId) -> Solution<P::Variable> {
        self.archive
            .get(id)
            .cloned()
            .expect("frontier ids always refer to archive members")
    }

    /// The cached move set for this run's problem instance.
    pub(crate) fn move_set(&mut self) -> Arc<[Move]> {
        self.moves
            .get_or_generate(self.problem.name(), self.problem.num_variables(), self.policy)
    }

    /// Returns the termination reason if the loop must stop before the next candidate.
    pub(crate) fn stop_reason(&self, cancel: Option<&AtomicBool>) -> Option<Termination> {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            Some(Termination::Cancelled)
        } else if self.frontier.is_empty() {
            Some(Termination::LocalOptimum)
        } else if self.budget.is_exhausted() {
            Some(Termination::BudgetExhausted)
        } else {
            None
        }
    }

    pub(crate) fn snapshot<'s>(
        &'s self,
        external: Option<&'s ParetoArchive<P::Variable, D>>,
    ) -> SearchSnapshot<'s, P::Variable, D> {
        SearchSnapshot {
            evaluations: self.budget.used(),
            candidates: self.candidates,
            frontier_len: self.frontier.len(),
            archive: &self.archive,
            external,
        }
    }

    pub(crate) fn finish(
        &mut self,
        name: &str,
        termination: Termination,
    ) -> ParetoResult<P::Variable> {
        self.state = SearchState::Terminated;
        log::info!(
            "{name} on {}: {:?} after {} evaluations, {} candidates, front size {}",
            self.problem.name(),
            termination,
            self.budget.used(),
            self.candidates,
            self.archive.len()
        );
        ParetoResult {
            front: self.archive.to_vec(),
            evaluations: self.budget.used(),
            candidates: self.candidates,
            termination,
        }
    }
}

/// Rejects seeds whose variable count differs from the problem's.
pub(crate) fn check_seeds<P: MoProblem>(
    problem: &P,
    seeds: &[Solution<P::Variable>],
) -> Result<(), ConfigError> {
    let expected = problem.num_variables();
    match seeds.iter().position(|s| s.len() != expected) {
        Some(index) => Err(ConfigError::SeedDimension {
            index,
            expected,
            found: seeds[index].len(),
        }),
        None => Ok(()),
    }
}
