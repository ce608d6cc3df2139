//! Run state, snapshots and results shared by the local search engines.

use crate::pareto::{ConstrainedDominance, ParetoArchive};
use crate::problem::Solution;

/// Lifecycle of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Seeds are being created or evaluated.
    Initializing,
    /// The explore loop is running.
    Exploring,
    /// The run has finished.
    Terminated,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The frontier emptied: the archive is a Pareto local optimum.
    LocalOptimum,
    /// The evaluation budget ran out (anytime truncation).
    BudgetExhausted,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Read-only view of an engine, handed to monitors after each candidate.
#[derive(Debug)]
pub struct SearchSnapshot<'s, V, D = ConstrainedDominance> {
    /// Evaluations spent so far, seeds included.
    pub evaluations: usize,
    /// Candidates fully processed so far.
    pub candidates: usize,
    /// Members still queued for exploration.
    pub frontier_len: usize,
    /// The working archive.
    pub archive: &'s ParetoArchive<V, D>,
    /// Archive of every evaluated solution (anytime PLS only).
    pub external: Option<&'s ParetoArchive<V, D>>,
}

/// Callback invoked once per processed candidate.
pub type Monitor<'a, V, D = ConstrainedDominance> =
    Box<dyn FnMut(&SearchSnapshot<'_, V, D>) + 'a>;

/// Result of a Pareto local search run.
#[derive(Debug, Clone)]
pub struct ParetoResult<V> {
    /// Final archive contents: the approximated Pareto front.
    pub front: Vec<Solution<V>>,
    /// Total evaluations, seeds included.
    pub evaluations: usize,
    /// Candidates fully processed.
    pub candidates: usize,
    /// Why the run stopped.
    pub termination: Termination,
}
