//! Anytime PLS configuration and policy axes.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which neighbours a candidate pass accepts into the archive.
///
/// Parses both kebab-case names and the short tags `<`, `>` and `><`.
///
/// ```
/// use u_pareto::atpls::AcceptancePolicy;
///
/// assert_eq!("><".parse::<AcceptancePolicy>(), Ok(AcceptancePolicy::DominatesOrNondominated));
/// assert_eq!("dominates-any".parse::<AcceptancePolicy>(), Ok(AcceptancePolicy::DominatesAny));
/// assert!("<<".parse::<AcceptancePolicy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcceptancePolicy {
    /// Accept whatever the archive accepts (tag `<`).
    FirstDominating,
    /// Accept only neighbours that dominate some archive member (tag `>`).
    DominatesAny,
    /// As `DominatesAny`; if a pass finds no dominating neighbour, fall
    /// back to the neighbours no member strictly dominates (tag `><`).
    #[default]
    DominatesOrNondominated,
}

impl AcceptancePolicy {
    /// Short tag used by experiment scripts.
    pub fn tag(self) -> &'static str {
        match self {
            Self::FirstDominating => "<",
            Self::DominatesAny => ">",
            Self::DominatesOrNondominated => "><",
        }
    }
}

impl fmt::Display for AcceptancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FirstDominating => "first-dominating",
            Self::DominatesAny => "dominates-any",
            Self::DominatesOrNondominated => "dominates-or-nondominated",
        };
        f.write_str(s)
    }
}

impl FromStr for AcceptancePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<" | "first-dominating" => Ok(Self::FirstDominating),
            ">" | "dominates-any" => Ok(Self::DominatesAny),
            "><" | "dominates-or-nondominated" => Ok(Self::DominatesOrNondominated),
            other => Err(ConfigError::UnknownAcceptance(other.to_string())),
        }
    }
}

/// How much of a candidate's move set one pass scans.
///
/// Parses kebab-case names and the short tags `*`, `1` and `1*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExploreBreadth {
    /// Scan every move (tag `*`).
    #[default]
    All,
    /// Stop at the first accepted neighbour (tag `1`).
    First,
    /// Behave as `First` until a pass accepts nothing, then switch to
    /// `All` for the rest of the run and re-queue the whole archive (tag `1*`).
    FirstThenReset,
}

impl ExploreBreadth {
    /// Short tag used by experiment scripts.
    pub fn tag(self) -> &'static str {
        match self {
            Self::All => "*",
            Self::First => "1",
            Self::FirstThenReset => "1*",
        }
    }

    /// Returns `true` if a pass ends at its first acceptance.
    pub fn stops_at_first(self) -> bool {
        matches!(self, Self::First | Self::FirstThenReset)
    }
}

impl fmt::Display for ExploreBreadth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::First => "first",
            Self::FirstThenReset => "first-then-reset",
        };
        f.write_str(s)
    }
}

impl FromStr for ExploreBreadth {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "*" | "all" => Ok(Self::All),
            "1" | "first" => Ok(Self::First),
            "1*" | "first-then-reset" => Ok(Self::FirstThenReset),
            other => Err(ConfigError::UnknownBreadth(other.to_string())),
        }
    }
}

/// How the next candidate is drawn from the explore frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CandidateSelection {
    /// Uniformly at random.
    #[default]
    UniformRandom,
    /// The member bordering the largest empty rectangles on the first two
    /// objectives (tag `OHI`).
    HypervolumeGap,
}

impl fmt::Display for CandidateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::UniformRandom => "uniform-random",
            Self::HypervolumeGap => "hypervolume-gap",
        };
        f.write_str(s)
    }
}

impl FromStr for CandidateSelection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "random" | "uniform-random" => Ok(Self::UniformRandom),
            "OHI" | "ohi" | "hypervolume-gap" => Ok(Self::HypervolumeGap),
            other => Err(ConfigError::UnknownSelection(other.to_string())),
        }
    }
}

/// Configuration for anytime Pareto Local Search.
///
/// # Examples
///
/// ```
/// use u_pareto::atpls::{AcceptancePolicy, AtplsConfig, ExploreBreadth};
///
/// let config = AtplsConfig::default()
///     .with_max_evaluations(50_000)
///     .with_acceptance(AcceptancePolicy::DominatesAny)
///     .with_breadth(ExploreBreadth::FirstThenReset)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtplsConfig {
    /// Evaluation budget, seed evaluations included.
    pub max_evaluations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Acceptance policy.
    pub acceptance: AcceptancePolicy,

    /// Explore breadth.
    pub breadth: ExploreBreadth,

    /// Candidate selection.
    pub selection: CandidateSelection,
}

impl Default for AtplsConfig {
    fn default() -> Self {
        Self {
            max_evaluations: usize::MAX,
            seed: None,
            acceptance: AcceptancePolicy::default(),
            breadth: ExploreBreadth::default(),
            selection: CandidateSelection::default(),
        }
    }
}

impl AtplsConfig {
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

    /// Sets the acceptance policy.
    pub fn with_acceptance(mut self, acceptance: AcceptancePolicy) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Sets the explore breadth.
    pub fn with_breadth(mut self, breadth: ExploreBreadth) -> Self {
        self.breadth = breadth;
        self
    }

    /// Sets the candidate selection.
    pub fn with_selection(mut self, selection: CandidateSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Builds a config from the short tags used by experiment scripts,
    /// e.g. `("><", "1*")`.
    pub fn from_tags(acceptance: &str, breadth: &str) -> Result<Self, ConfigError> {
        Ok(Self::default()
            .with_acceptance(acceptance.parse()?)
            .with_breadth(breadth.parse()?))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_evaluations == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AtplsConfig::default();
        assert_eq!(config.acceptance, AcceptancePolicy::DominatesOrNondominated);
        assert_eq!(config.breadth, ExploreBreadth::All);
        assert_eq!(config.selection, CandidateSelection::UniformRandom);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_legacy_tags() {
        let config = AtplsConfig::from_tags(">", "1*").unwrap();
        assert_eq!(config.acceptance, AcceptancePolicy::DominatesAny);
        assert_eq!(config.breadth, ExploreBreadth::FirstThenReset);

        assert_eq!("<".parse::<AcceptancePolicy>(), Ok(AcceptancePolicy::FirstDominating));
        assert_eq!("1".parse::<ExploreBreadth>(), Ok(ExploreBreadth::First));
        assert_eq!("*".parse::<ExploreBreadth>(), Ok(ExploreBreadth::All));
        assert_eq!("OHI".parse::<CandidateSelection>(), Ok(CandidateSelection::HypervolumeGap));
    }

    #[test]
    fn test_display_parses_back() {
        for a in [
            AcceptancePolicy::FirstDominating,
            AcceptancePolicy::DominatesAny,
            AcceptancePolicy::DominatesOrNondominated,
        ] {
            assert_eq!(a.to_string().parse::<AcceptancePolicy>(), Ok(a));
            assert_eq!(a.tag().parse::<AcceptancePolicy>(), Ok(a));
        }
        for b in [ExploreBreadth::All, ExploreBreadth::First, ExploreBreadth::FirstThenReset] {
            assert_eq!(b.to_string().parse::<ExploreBreadth>(), Ok(b));
        }
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(
            "<>".parse::<AcceptancePolicy>(),
            Err(ConfigError::UnknownAcceptance("<>".into()))
        );
        assert_eq!(
            "2".parse::<ExploreBreadth>(),
            Err(ConfigError::UnknownBreadth("2".into()))
        );
        assert!(matches!(
            AtplsConfig::from_tags("><", "**"),
            Err(ConfigError::UnknownBreadth(_))
        ));
        assert!("crowding".parse::<CandidateSelection>().is_err());
    }

    #[test]
    fn test_stops_at_first() {
        assert!(!ExploreBreadth::All.stops_at_first());
        assert!(ExploreBreadth::First.stops_at_first());
        assert!(ExploreBreadth::FirstThenReset.stops_at_first());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let config = AtplsConfig::default().with_max_evaluations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBudget));
    }
}
