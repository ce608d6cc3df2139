//! Configuration errors.
//!
//! Every error in this crate is a construction-time problem: an unknown
//! policy tag, an unusable budget, or instance data of the wrong shape.
//! Running out of evaluations is a normal termination and never an error.

use thiserror::Error;

/// Error raised when a configuration or problem instance is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Acceptance tag not recognised by
    /// [`AcceptancePolicy`](crate::atpls::AcceptancePolicy)'s `FromStr`.
    #[error("unknown acceptance policy: {0:?}")]
    UnknownAcceptance(String),

    /// Breadth tag not recognised by [`ExploreBreadth::from_str`](crate::atpls::ExploreBreadth).
    #[error("unknown explore breadth: {0:?}")]
    UnknownBreadth(String),

    /// Selection tag not recognised by
    /// [`CandidateSelection`](crate::atpls::CandidateSelection)'s `FromStr`.
    #[error("unknown candidate selection: {0:?}")]
    UnknownSelection(String),

    /// Neighborhood tag not recognised by
    /// [`NeighborhoodKind`](crate::neighborhood::NeighborhoodKind)'s `FromStr`.
    #[error("unknown neighborhood: {0:?}")]
    UnknownNeighborhood(String),

    /// The evaluation budget must allow at least one evaluation.
    #[error("max_evaluations must be at least 1")]
    ZeroBudget,

    /// A seed solution does not match the problem dimension.
    #[error("seed {index} has {found} variables, problem expects {expected}")]
    SeedDimension {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Problem instance data is inconsistent.
    #[error("invalid instance: {0}")]
    Instance(String),
}
