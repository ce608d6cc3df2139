//! Multi-objective NK-landscape.

use rand::Rng;

use super::types::{MoProblem, Solution};
use crate::error::ConfigError;

/// Multi-objective NK-landscape (binary, tunable ruggedness).
///
/// For objective `m` and locus `i`, the contribution depends on bit `i`
/// and the `K` bits listed in `links[m][i]`. The `K + 1` bits, taken in
/// ascending locus order, form an index into `tables[m][i]` (length
/// `2^(K+1)`). Objective `m` is `1 - mean contribution`, so lower is
/// better.
///
/// Instance generation is left to the caller; the model only evaluates.
#[derive(Debug, Clone)]
pub struct NkLandscape {
    name: String,
    n: usize,
    k: usize,
    links: Vec<Vec<Vec<usize>>>,
    tables: Vec<Vec<Vec<f64>>>,
}

impl NkLandscape {
    /// Creates a landscape from its epistatic links and contribution tables.
    ///
    /// `links[m][i]` lists the `k` loci linked to locus `i` under objective
    /// `m` (distinct, excluding `i`). `tables[m][i]` has `2^(k+1)` entries.
    pub fn new(
        n: usize,
        k: usize,
        links: Vec<Vec<Vec<usize>>>,
        tables: Vec<Vec<Vec<f64>>>,
    ) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::Instance("NK landscape needs at least one locus".into()));
        }
        if k >= n {
            return Err(ConfigError::Instance(format!("k = {k} must be below n = {n}")));
        }
        if links.is_empty() || links.len() != tables.len() {
            return Err(ConfigError::Instance(format!(
                "{} link sets for {} table sets",
                links.len(),
                tables.len()
            )));
        }

        let table_len = 1usize << (k + 1);
        for (m, (obj_links, obj_tables)) in links.iter().zip(&tables).enumerate() {
            if obj_links.len() != n || obj_tables.len() != n {
                return Err(ConfigError::Instance(format!("objective {m}: expected {n} loci")));
            }
            for (i, locus) in obj_links.iter().enumerate() {
                let mut sorted = locus.clone();
                sorted.sort_unstable();
                sorted.dedup();
                if sorted.len() != k || sorted.iter().any(|&j| j >= n || j == i) {
                    return Err(ConfigError::Instance(format!(
                        "objective {m}, locus {i}: links must be {k} distinct loci other than {i}"
                    )));
                }
            }
            if let Some(i) = obj_tables.iter().position(|t| t.len() != table_len) {
                return Err(ConfigError::Instance(format!(
                    "objective {m}, locus {i}: table needs {table_len} entries"
                )));
            }
        }

        Ok(Self {
            name: format!("NK-{n}-{k}"),
            n,
            k,
            links,
            tables,
        })
    }

    /// Epistasis degree K.
    pub fn k(&self) -> usize {
        self.k
    }
}

impl MoProblem for NkLandscape {
    type Variable = bool;

    fn name(&self) -> &str {
        &self.name
    }

    fn num_variables(&self) -> usize {
        self.n
    }

    fn num_objectives(&self) -> usize {
        self.links.len()
    }

    fn create_solution<R: Rng>(&self, rng: &mut R) -> Solution<bool> {
        let bits = (0..self.n).map(|_| rng.random_bool(0.5)).collect();
        Solution::new(bits, self.num_objectives(), 0)
    }

    fn evaluate(&self, solution: &mut Solution<bool>) {
        let bits = &solution.variables;
        let mut loci = Vec::with_capacity(self.k + 1);

        let objectives = self
            .links
            .iter()
            .zip(&self.tables)
            .map(|(obj_links, obj_tables)| {
                let mut total = 0.0;
                for i in 0..self.n {
                    loci.clear();
                    loci.extend_from_slice(&obj_links[i]);
                    loci.push(i);
                    loci.sort_unstable();
                    let pattern = loci
                        .iter()
                        .fold(0usize, |acc, &j| (acc << 1) | usize::from(bits[j]));
                    total += obj_tables[i][pattern];
                }
                1.0 - total / self.n as f64
            })
            .collect();

        solution.objectives = objectives;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// N = 2, K = 1, one objective; each locus linked to the other.
    fn two_locus() -> NkLandscape {
        let links = vec![vec![vec![1], vec![0]]];
        // Pattern index = (bit0 << 1) | bit1 for both loci.
        let tables = vec![vec![vec![0.0, 0.2, 0.4, 1.0], vec![0.0, 0.6, 0.2, 1.0]]];
        NkLandscape::new(2, 1, links, tables).unwrap()
    }

    #[test]
    fn test_all_ones_is_optimal() {
        let nk = two_locus();
        let mut s = Solution::new(vec![true, true], 1, 0);
        nk.evaluate(&mut s);
        assert!(s.objectives[0].abs() < 1e-12);
    }

    #[test]
    fn test_pattern_uses_sorted_loci() {
        let nk = two_locus();
        let mut s = Solution::new(vec![false, true], 1, 0);
        nk.evaluate(&mut s);
        // pattern 0b01 = 1 for both loci: (0.2 + 0.6) / 2 = 0.4
        assert!((s.objectives[0] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_self_link() {
        let links = vec![vec![vec![0], vec![0]]];
        let tables = vec![vec![vec![0.0; 4], vec![0.0; 4]]];
        assert!(NkLandscape::new(2, 1, links, tables).is_err());
    }

    #[test]
    fn test_rejects_short_table() {
        let links = vec![vec![vec![1], vec![0]]];
        let tables = vec![vec![vec![0.0; 4], vec![0.0; 3]]];
        assert!(NkLandscape::new(2, 1, links, tables).is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(two_locus().name(), "NK-2-1");
    }
}
