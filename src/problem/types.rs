//! Core solution type and problem trait.

use rand::Rng;

/// A candidate solution of a multi-objective problem.
///
/// All objectives are **minimized**. A constraint entry of `0.0` means
/// the constraint is satisfied; any other value is a violation whose
/// magnitude is added to [`total_violation`](Solution::total_violation).
///
/// Solutions carry no algorithm-private state. Engines keep their caches
/// (move sets, frontier membership) in their own structures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<V> {
    /// Decision variables.
    pub variables: Vec<V>,
    /// Objective values (lower is better).
    pub objectives: Vec<f64>,
    /// Constraint violations (`0.0` = satisfied).
    pub constraints: Vec<f64>,
}

impl<V> Solution<V> {
    /// Creates an unevaluated solution with zeroed objective and constraint vectors.
    pub fn new(variables: Vec<V>, num_objectives: usize, num_constraints: usize) -> Self {
        Self {
            variables,
            objectives: vec![0.0; num_objectives],
            constraints: vec![0.0; num_constraints],
        }
    }

    /// Returns `true` if every constraint is satisfied.
    pub fn is_feasible(&self) -> bool {
        self.constraints.iter().all(|&c| c == 0.0)
    }

    /// Sum of absolute constraint violations.
    pub fn total_violation(&self) -> f64 {
        self.constraints.iter().map(|c| c.abs()).sum()
    }

    /// Number of decision variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if the solution has no decision variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Resets objective and constraint values to zero.
    ///
    /// Used when a copy is about to be modified and re-evaluated.
    pub fn reset_evaluation(&mut self) {
        self.objectives.iter_mut().for_each(|o| *o = 0.0);
        self.constraints.iter_mut().for_each(|c| *c = 0.0);
    }
}

/// Defines a multi-objective optimization problem.
///
/// Users implement this trait to plug a problem into the local search
/// engines. It covers:
///
/// 1. **Shape**: variable, objective and constraint counts plus a name
/// 2. **Initialization**: how to create a random solution
/// 3. **Evaluation**: how to fill objective and constraint vectors
///
/// # Thread Safety
///
/// Problems are `Send + Sync` so a single instance can back several
/// independent runs on different threads. `evaluate` takes `&self`;
/// implementations that need scratch space must keep it thread-safe.
pub trait MoProblem: Send + Sync {
    /// The decision-variable type (`bool` for binary, `usize` for permutations).
    type Variable: Clone + Send + Sync;

    /// Instance name. Used as part of the move-set cache key and by
    /// [`NeighborhoodKind::for_problem`](crate::neighborhood::NeighborhoodKind::for_problem).
    fn name(&self) -> &str;

    /// Number of decision variables.
    fn num_variables(&self) -> usize;

    /// Number of objectives (M).
    fn num_objectives(&self) -> usize;

    /// Number of constraints.
    fn num_constraints(&self) -> usize {
        0
    }

    /// Creates a solution with randomized decision variables.
    ///
    /// The returned solution is unevaluated.
    fn create_solution<R: Rng>(&self, rng: &mut R) -> Solution<Self::Variable>;

    /// Evaluates a solution in place, filling its objective and
    /// constraint vectors.
    fn evaluate(&self, solution: &mut Solution<Self::Variable>);
}
