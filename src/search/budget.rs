//! Evaluation budget accounting.

/// Counts evaluations against a fixed budget.
///
/// Every evaluation point calls [`try_consume`](Self::try_consume) before
/// evaluating, so a run can never exceed the budget through neighbour
/// evaluations. Seed evaluations use [`charge`](Self::charge), which
/// counts unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationBudget {
    max: usize,
    used: usize,
}

impl EvaluationBudget {
    /// Creates a budget allowing `max` evaluations.
    pub fn new(max: usize) -> Self {
        Self { max, used: 0 }
    }

    /// Consumes one evaluation if any remain.
    pub fn try_consume(&mut self) -> bool {
        if self.used < self.max {
            self.used += 1;
            true
        } else {
            false
        }
    }

    /// Counts one evaluation regardless of the remaining budget.
    pub fn charge(&mut self) {
        self.used += 1;
    }

    /// Evaluations spent so far.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Evaluations left.
    pub fn remaining(&self) -> usize {
        self.max.saturating_sub(self.used)
    }

    /// Returns `true` once no evaluation remains.
    pub fn is_exhausted(&self) -> bool {
        self.used >= self.max
    }
}
