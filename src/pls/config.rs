//! PLS configuration.

use crate::error::ConfigError;

/// Configuration for Pareto Local Search.
///
/// # Examples
///
/// ```
/// use u_pareto::pls::PlsConfig;
///
/// let config = PlsConfig::default()
///     .with_max_evaluations(10_000)
///     .with_seed(42);
/// assert_eq!(config.max_evaluations, 10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlsConfig {
    /// Evaluation budget, seed evaluations included.
    ///
    /// The default is effectively unlimited: the run stops at a Pareto
    /// local optimum.
    pub max_evaluations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PlsConfig {
    fn default() -> Self {
        Self {
            max_evaluations: usize::MAX,
            seed: None,
        }
    }
}

impl PlsConfig {
    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_evaluations == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}
