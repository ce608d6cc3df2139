//! Pareto dominance comparison.

use crate::problem::Solution;

/// Dominance comparison result.
///
/// Maps onto the classic `-1 / 0 / +1` comparator convention via
/// [`Dominance::signum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (incomparable or equal).
    Neither,
}

impl Dominance {
    /// `-1` if left dominates, `+1` if right dominates, `0` otherwise.
    pub fn signum(self) -> i8 {
        match self {
            Dominance::Left => -1,
            Dominance::Neither => 0,
            Dominance::Right => 1,
        }
    }

    /// Swaps the roles of left and right.
    pub fn reverse(self) -> Self {
        match self {
            Dominance::Left => Dominance::Right,
            Dominance::Right => Dominance::Left,
            Dominance::Neither => Dominance::Neither,
        }
    }
}

/// Compares two objective vectors for Pareto dominance (minimization).
///
/// Returns [`Dominance::Neither`] for equal vectors.
///
/// # Example
///
/// ```
/// use u_pareto::pareto::{pareto_dominance, Dominance};
///
/// assert_eq!(pareto_dominance(&[1.0, 2.0], &[2.0, 2.0]), Dominance::Left);
/// assert_eq!(pareto_dominance(&[1.0, 3.0], &[2.0, 2.0]), Dominance::Neither);
/// assert_eq!(pareto_dominance(&[2.0, 2.0], &[2.0, 2.0]), Dominance::Neither);
/// ```
pub fn pareto_dominance(a: &[f64], b: &[f64]) -> Dominance {
    debug_assert_eq!(a.len(), b.len(), "objective vectors must have the same length");

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
        if a_better_in_some && b_better_in_some {
            return Dominance::Neither;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Strategy for comparing two solutions.
///
/// Injected into [`ParetoArchive`](super::ParetoArchive) and the search
/// engines so alternative dominance semantics can be plugged in.
pub trait DominanceComparator: Send + Sync {
    /// Compares `a` against `b`.
    fn compare<V>(&self, a: &Solution<V>, b: &Solution<V>) -> Dominance;
}

/// Pareto dominance on objectives only; constraints are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParetoDominance;

impl DominanceComparator for ParetoDominance {
    fn compare<V>(&self, a: &Solution<V>, b: &Solution<V>) -> Dominance {
        pareto_dominance(&a.objectives, &b.objectives)
    }
}

/// Constraint-aware Pareto dominance (the default comparator).
///
/// Total violation is compared first: the solution with the lower total
/// violation dominates (a feasible solution has zero). When both
/// violations are equal, including the all-feasible case, plain Pareto
/// dominance on the objectives decides.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstrainedDominance;

impl DominanceComparator for ConstrainedDominance {
    fn compare<V>(&self, a: &Solution<V>, b: &Solution<V>) -> Dominance {
        let va = a.total_violation();
        let vb = b.total_violation();
        if va < vb {
            Dominance::Left
        } else if vb < va {
            Dominance::Right
        } else {
            pareto_dominance(&a.objectives, &b.objectives)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sol(objectives: Vec<f64>, violation: f64) -> Solution<u8> {
        Solution {
            variables: vec![],
            objectives,
            constraints: vec![violation],
        }
    }

    #[test]
    fn test_pareto_left_right_neither() {
        assert_eq!(pareto_dominance(&[1.0, 1.0], &[2.0, 2.0]), Dominance::Left);
        assert_eq!(pareto_dominance(&[2.0, 2.0], &[1.0, 1.0]), Dominance::Right);
        assert_eq!(pareto_dominance(&[1.0, 3.0], &[3.0, 1.0]), Dominance::Neither);
    }

    #[test]
    fn test_weak_improvement_dominates() {
        assert_eq!(pareto_dominance(&[1.0, 2.0], &[1.0, 3.0]), Dominance::Left);
    }

    #[test]
    fn test_equal_vectors_are_neither() {
        assert_eq!(pareto_dominance(&[1.0, 2.0], &[1.0, 2.0]), Dominance::Neither);
    }

    #[test]
    fn test_signum_and_reverse() {
        assert_eq!(Dominance::Left.signum(), -1);
        assert_eq!(Dominance::Neither.signum(), 0);
        assert_eq!(Dominance::Right.signum(), 1);
        assert_eq!(Dominance::Left.reverse(), Dominance::Right);
        assert_eq!(Dominance::Neither.reverse(), Dominance::Neither);
    }

    #[test]
    fn test_feasible_dominates_violator() {
        let feasible = sol(vec![10.0, 10.0], 0.0);
        let violator = sol(vec![0.0, 0.0], 1.0);
        assert_eq!(ConstrainedDominance.compare(&feasible, &violator), Dominance::Left);
        assert_eq!(ConstrainedDominance.compare(&violator, &feasible), Dominance::Right);
    }

    #[test]
    fn test_smaller_violation_dominates() {
        let a = sol(vec![5.0, 5.0], 1.0);
        let b = sol(vec![0.0, 0.0], 2.0);
        assert_eq!(ConstrainedDominance.compare(&a, &b), Dominance::Left);
    }

    #[test]
    fn test_equal_violation_falls_back_to_objectives() {
        let a = sol(vec![1.0, 1.0], 2.0);
        let b = sol(vec![2.0, 2.0], 2.0);
        assert_eq!(ConstrainedDominance.compare(&a, &b), Dominance::Left);
    }

    #[test]
    fn test_pareto_comparator_ignores_constraints() {
        let feasible = sol(vec![10.0, 10.0], 0.0);
        let violator = sol(vec![0.0, 0.0], 1.0);
        assert_eq!(ParetoDominance.compare(&feasible, &violator), Dominance::Right);
    }
}
