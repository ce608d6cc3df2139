//! One interface over both local search engines.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::ParetoResult;
use crate::atpls::Atpls;
use crate::neighborhood::NeighborhoodPolicy;
use crate::pareto::{ConstrainedDominance, DominanceComparator, ParetoArchive};
use crate::pls::Pls;
use crate::problem::{MoProblem, Solution};

/// A PLS or anytime PLS engine.
///
/// Lets experiment code hold either engine behind the same run and
/// inspection surface.
///
/// ```
/// use u_pareto::atpls::{Atpls, AtplsConfig};
/// use u_pareto::neighborhood::BitFlip;
/// use u_pareto::pls::{Pls, PlsConfig};
/// use u_pareto::problem::Knapsack;
/// use u_pareto::search::LocalSearch;
///
/// let kp = Knapsack::new(vec![1.0, 2.0], vec![vec![1.0, 3.0], vec![2.0, 1.0]], 2.0).unwrap();
///
/// let mut engines: Vec<LocalSearch<'_, _, _>> = vec![
///     Pls::new(&kp, &BitFlip, PlsConfig::default().with_seed(1)).unwrap().into(),
///     Atpls::new(&kp, &BitFlip, AtplsConfig::default().with_seed(1)).unwrap().into(),
/// ];
/// for engine in &mut engines {
///     let result = engine.run();
///     assert_eq!(result.evaluations, engine.evaluations());
/// }
/// assert_eq!(engines[1].name(), "ATPLS");
/// ```
pub enum LocalSearch<'a, P: MoProblem, N, D = ConstrainedDominance> {
    /// Pareto Local Search.
    Pls(Pls<'a, P, N, D>),
    /// Anytime Pareto Local Search.
    Atpls(Atpls<'a, P, N, D>),
}

impl<'a, P, N, D> LocalSearch<'a, P, N, D>
where
    P: MoProblem,
    N: NeighborhoodPolicy<P::Variable>,
    D: DominanceComparator + Clone,
{
    /// Runs the wrapped engine from scratch.
    pub fn run(&mut self) -> ParetoResult<P::Variable> {
        match self {
            Self::Pls(e) => e.run(),
            Self::Atpls(e) => e.run(),
        }
    }

    /// Runs the wrapped engine with an optional cancellation token.
    pub fn run_with_cancel(
        &mut self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> ParetoResult<P::Variable> {
        match self {
            Self::Pls(e) => e.run_with_cancel(cancel),
            Self::Atpls(e) => e.run_with_cancel(cancel),
        }
    }

    /// The working archive.
    pub fn archive(&self) -> &ParetoArchive<P::Variable, D> {
        match self {
            Self::Pls(e) => e.archive(),
            Self::Atpls(e) => e.archive(),
        }
    }

    /// The external archive, for engines that keep one.
    pub fn external_archive(&self) -> Option<&ParetoArchive<P::Variable, D>> {
        match self {
            Self::Pls(_) => None,
            Self::Atpls(e) => Some(e.external_archive()),
        }
    }

    /// Current archive contents.
    pub fn population(&self) -> Vec<Solution<P::Variable>> {
        match self {
            Self::Pls(e) => e.population(),
            Self::Atpls(e) => e.population(),
        }
    }

    /// The final (or current) front.
    pub fn result(&self) -> Vec<Solution<P::Variable>> {
        match self {
            Self::Pls(e) => e.result(),
            Self::Atpls(e) => e.result(),
        }
    }

    /// Evaluations spent in the last (or current) run.
    pub fn evaluations(&self) -> usize {
        match self {
            Self::Pls(e) => e.evaluations(),
            Self::Atpls(e) => e.evaluations(),
        }
    }

    /// Algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pls(e) => e.name(),
            Self::Atpls(e) => e.name(),
        }
    }

    /// Human-readable algorithm description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Pls(e) => e.description(),
            Self::Atpls(e) => e.description(),
        }
    }
}

impl<'a, P: MoProblem, N, D> From<Pls<'a, P, N, D>> for LocalSearch<'a, P, N, D> {
    fn from(engine: Pls<'a, P, N, D>) -> Self {
        Self::Pls(engine)
    }
}

impl<'a, P: MoProblem, N, D> From<Atpls<'a, P, N, D>> for LocalSearch<'a, P, N, D> {
    fn from(engine: Atpls<'a, P, N, D>) -> Self {
        Self::Atpls(engine)
    }
}
