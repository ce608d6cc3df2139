//! Multi-objective traveling salesman.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{MoProblem, Solution};
use crate::error::ConfigError;

/// Multi-objective symmetric or asymmetric TSP.
///
/// A solution is a permutation of city indices. Objective `m` is the
/// length of the closed tour under distance matrix `m`.
#[derive(Debug, Clone)]
pub struct Tsp {
    name: String,
    distances: Vec<Vec<Vec<f64>>>,
}

impl Tsp {
    /// Creates a TSP instance from one square distance matrix per objective.
    pub fn new(distances: Vec<Vec<Vec<f64>>>) -> Result<Self, ConfigError> {
        let n = distances
            .first()
            .map(|d| d.len())
            .ok_or_else(|| ConfigError::Instance("TSP needs at least one objective".into()))?;
        if n < 2 {
            return Err(ConfigError::Instance("TSP needs at least two cities".into()));
        }
        check_square(&distances, n)?;

        Ok(Self {
            name: format!("TSP-{n}"),
            distances,
        })
    }

    /// Tour length of `tour` under matrix `m`.
    pub fn tour_length(&self, tour: &[usize], m: usize) -> f64 {
        let d = &self.distances[m];
        let open: f64 = tour.windows(2).map(|w| d[w[0]][w[1]]).sum();
        match (tour.last(), tour.first()) {
            (Some(&last), Some(&first)) => open + d[last][first],
            _ => open,
        }
    }
}

pub(super) fn check_square(matrices: &[Vec<Vec<f64>>], n: usize) -> Result<(), ConfigError> {
    for (m, matrix) in matrices.iter().enumerate() {
        if matrix.len() != n || matrix.iter().any(|row| row.len() != n) {
            return Err(ConfigError::Instance(format!("matrix {m} is not {n}x{n}")));
        }
    }
    Ok(())
}

impl MoProblem for Tsp {
    type Variable = usize;

    fn name(&self) -> &str {
        &self.name
    }

    fn num_variables(&self) -> usize {
        self.distances[0].len()
    }

    fn num_objectives(&self) -> usize {
        self.distances.len()
    }

    fn create_solution<R: Rng>(&self, rng: &mut R) -> Solution<usize> {
        let mut tour: Vec<usize> = (0..self.num_variables()).collect();
        tour.shuffle(rng);
        Solution::new(tour, self.num_objectives(), 0)
    }

    fn evaluate(&self, solution: &mut Solution<usize>) {
        solution.objectives = (0..self.distances.len())
            .map(|m| self.tour_length(&solution.variables, m))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> Tsp {
        // Four corners of a unit square; second objective counts hops.
        let s = std::f64::consts::SQRT_2;
        let euclid = vec![
            vec![0.0, 1.0, s, 1.0],
            vec![1.0, 0.0, 1.0, s],
            vec![s, 1.0, 0.0, 1.0],
            vec![1.0, s, 1.0, 0.0],
        ];
        let hops = vec![vec![1.0; 4]; 4];
        Tsp::new(vec![euclid, hops]).unwrap()
    }

    #[test]
    fn test_perimeter_tour() {
        let tsp = square();
        let mut s = Solution::new(vec![0, 1, 2, 3], 2, 0);
        tsp.evaluate(&mut s);
        assert!((s.objectives[0] - 4.0).abs() < 1e-12);
        assert!((s.objectives[1] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_crossing_tour_is_longer() {
        let tsp = square();
        let mut s = Solution::new(vec![0, 2, 1, 3], 2, 0);
        tsp.evaluate(&mut s);
        assert!(s.objectives[0] > 4.0);
    }

    #[test]
    fn test_random_solution_is_permutation() {
        let tsp = square();
        let mut rng = StdRng::seed_from_u64(7);
        let s = tsp.create_solution(&mut rng);
        let mut sorted = s.variables.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rejects_ragged_matrix() {
        let bad = vec![vec![vec![0.0, 1.0], vec![1.0]]];
        assert!(Tsp::new(bad).is_err());
    }
}
