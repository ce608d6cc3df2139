//! Multi-objective 0/1 knapsack.

use rand::Rng;

use super::types::{MoProblem, Solution};
use crate::error::ConfigError;

/// Multi-objective 0/1 knapsack problem.
///
/// Each item has one weight and one value per objective. A solution
/// selects a subset of items (`true` = packed). Objective `k` is the
/// value left unpacked, `sum(values[k]) - packed(values[k])`, so that
/// maximizing packed value becomes minimization. The single constraint
/// holds the overweight amount (`0.0` when the load fits).
///
/// # Examples
///
/// ```
/// use u_pareto::problem::{Knapsack, MoProblem, Solution};
///
/// let kp = Knapsack::new(
///     vec![2.0, 3.0],
///     vec![vec![1.0, 2.0], vec![2.0, 1.0]],
///     4.0,
/// ).unwrap();
///
/// let mut s = Solution::new(vec![true, false], 2, 1);
/// kp.evaluate(&mut s);
/// assert_eq!(s.objectives, vec![2.0, 1.0]);
/// assert!(s.is_feasible());
/// ```
#[derive(Debug, Clone)]
pub struct Knapsack {
    name: String,
    weights: Vec<f64>,
    values: Vec<Vec<f64>>,
    value_totals: Vec<f64>,
    capacity: f64,
}

impl Knapsack {
    /// Creates a knapsack instance.
    ///
    /// `values` holds one vector per objective, each as long as `weights`.
    pub fn new(
        weights: Vec<f64>,
        values: Vec<Vec<f64>>,
        capacity: f64,
    ) -> Result<Self, ConfigError> {
        if weights.is_empty() {
            return Err(ConfigError::Instance("knapsack needs at least one item".into()));
        }
        if values.is_empty() {
            return Err(ConfigError::Instance("knapsack needs at least one objective".into()));
        }
        if let Some(v) = values.iter().find(|v| v.len() != weights.len()) {
            return Err(ConfigError::Instance(format!(
                "value vector has {} entries, expected {}",
                v.len(),
                weights.len()
            )));
        }
        if capacity < 0.0 {
            return Err(ConfigError::Instance(format!("negative capacity {capacity}")));
        }

        let value_totals = values.iter().map(|v| v.iter().sum()).collect();
        Ok(Self {
            name: format!("KP-{}", weights.len()),
            weights,
            values,
            value_totals,
            capacity,
        })
    }

    /// Overrides the instance name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Item weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Knapsack capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Total packed value per objective for a selection.
    pub fn packed_values(&self, selection: &[bool]) -> Vec<f64> {
        self.values
            .iter()
            .map(|v| {
                v.iter()
                    .zip(selection)
                    .filter(|&(_, &packed)| packed)
                    .map(|(&value, _)| value)
                    .sum()
            })
            .collect()
    }
}

impl MoProblem for Knapsack {
    type Variable = bool;

    fn name(&self) -> &str {
        &self.name
    }

    fn num_variables(&self) -> usize {
        self.weights.len()
    }

    fn num_objectives(&self) -> usize {
        self.values.len()
    }

    fn num_constraints(&self) -> usize {
        1
    }

    fn create_solution<R: Rng>(&self, rng: &mut R) -> Solution<bool> {
        let bits = (0..self.weights.len()).map(|_| rng.random_bool(0.5)).collect();
        Solution::new(bits, self.num_objectives(), 1)
    }

    fn evaluate(&self, solution: &mut Solution<bool>) {
        let load: f64 = self
            .weights
            .iter()
            .zip(&solution.variables)
            .filter(|&(_, &packed)| packed)
            .map(|(&w, _)| w)
            .sum();

        let packed = self.packed_values(&solution.variables);
        solution.objectives = self
            .value_totals
            .iter()
            .zip(packed)
            .map(|(total, p)| total - p)
            .collect();
        solution.constraints = vec![(load - self.capacity).max(0.0)];
    }
}
