//! Multi-objective quadratic assignment.

use rand::seq::SliceRandom;
use rand::Rng;

use super::tsp::check_square;
use super::types::{MoProblem, Solution};
use crate::error::ConfigError;

/// Multi-objective QAP with one distance matrix and one flow matrix per objective.
///
/// A solution `π` assigns facility `π[i]` to location `i`. Objective `k`
/// is `Σ_i Σ_j distance[i][j] · flows[k][π[i]][π[j]]`.
#[derive(Debug, Clone)]
pub struct Qap {
    name: String,
    distance: Vec<Vec<f64>>,
    flows: Vec<Vec<Vec<f64>>>,
}

impl Qap {
    /// Creates a QAP instance.
    pub fn new(distance: Vec<Vec<f64>>, flows: Vec<Vec<Vec<f64>>>) -> Result<Self, ConfigError> {
        let n = distance.len();
        if n < 2 {
            return Err(ConfigError::Instance("QAP needs at least two locations".into()));
        }
        if flows.is_empty() {
            return Err(ConfigError::Instance("QAP needs at least one flow matrix".into()));
        }
        check_square(std::slice::from_ref(&distance), n)?;
        check_square(&flows, n)?;

        Ok(Self {
            name: format!("QAP-{n}"),
            distance,
            flows,
        })
    }
}

impl MoProblem for Qap {
    type Variable = usize;

    fn name(&self) -> &str {
        &self.name
    }

    fn num_variables(&self) -> usize {
        self.distance.len()
    }

    fn num_objectives(&self) -> usize {
        self.flows.len()
    }

    fn create_solution<R: Rng>(&self, rng: &mut R) -> Solution<usize> {
        let mut perm: Vec<usize> = (0..self.num_variables()).collect();
        perm.shuffle(rng);
        Solution::new(perm, self.num_objectives(), 0)
    }

    fn evaluate(&self, solution: &mut Solution<usize>) {
        let perm = &solution.variables;
        solution.objectives = self
            .flows
            .iter()
            .map(|flow| {
                let mut cost = 0.0;
                for (i, row) in self.distance.iter().enumerate() {
                    for (j, &d) in row.iter().enumerate() {
                        cost += d * flow[perm[i]][perm[j]];
                    }
                }
                cost
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Qap {
        let distance = vec![vec![0.0, 1.0], vec![2.0, 0.0]];
        let flows = vec![
            vec![vec![0.0, 3.0], vec![1.0, 0.0]],
            vec![vec![0.0, 1.0], vec![5.0, 0.0]],
        ];
        Qap::new(distance, flows).unwrap()
    }

    #[test]
    fn test_identity_assignment() {
        let qap = tiny();
        let mut s = Solution::new(vec![0, 1], 2, 0);
        qap.evaluate(&mut s);
        // 1*3 + 2*1 and 1*1 + 2*5
        assert_eq!(s.objectives, vec![5.0, 11.0]);
    }

    #[test]
    fn test_swapped_assignment_trades_objectives() {
        let qap = tiny();
        let mut s = Solution::new(vec![1, 0], 2, 0);
        qap.evaluate(&mut s);
        // 1*1 + 2*3 and 1*5 + 2*1
        assert_eq!(s.objectives, vec![7.0, 7.0]);
    }

    #[test]
    fn test_rejects_mismatched_flow() {
        let distance = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let flows = vec![vec![vec![0.0]]];
        assert!(Qap::new(distance, flows).is_err());
    }
}
