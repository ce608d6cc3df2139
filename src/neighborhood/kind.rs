//! Policy selection by problem family.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Names the concrete neighborhood policies.
///
/// Lets callers pick a policy from a problem name or a config string
/// without knowing the variable type up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborhoodKind {
    /// [`BitFlip`](super::BitFlip).
    BitFlip,
    /// [`PairFlip`](super::PairFlip).
    PairFlip,
    /// [`Reversal`](super::Reversal).
    Reversal,
    /// [`Swap`](super::Swap).
    Swap,
}

impl NeighborhoodKind {
    /// The policy conventionally used for a problem family, by instance name.
    ///
    /// NK-landscapes use single flips, knapsacks pair flips, TSP 2-opt
    /// reversal and QAP swaps. Returns `None` for unknown families.
    ///
    /// ```
    /// use u_pareto::neighborhood::NeighborhoodKind;
    ///
    /// assert_eq!(NeighborhoodKind::for_problem("NK-50-5"), Some(NeighborhoodKind::BitFlip));
    /// assert_eq!(NeighborhoodKind::for_problem("KP-100"), Some(NeighborhoodKind::PairFlip));
    /// assert_eq!(NeighborhoodKind::for_problem("TSP-30"), Some(NeighborhoodKind::Reversal));
    /// assert_eq!(NeighborhoodKind::for_problem("QAP-12"), Some(NeighborhoodKind::Swap));
    /// assert_eq!(NeighborhoodKind::for_problem("ZDT1"), None);
    /// ```
    pub fn for_problem(name: &str) -> Option<Self> {
        if name.contains("NK") {
            Some(Self::BitFlip)
        } else if name.contains("KP") || name.contains("Knapsack") {
            Some(Self::PairFlip)
        } else if name.contains("TSP") {
            Some(Self::Reversal)
        } else if name.contains("QAP") {
            Some(Self::Swap)
        } else {
            None
        }
    }

    /// Returns `true` for policies over binary encodings.
    pub fn is_binary(self) -> bool {
        matches!(self, Self::BitFlip | Self::PairFlip)
    }

    /// Size of the move set for an instance with `n` variables.
    pub fn move_count(self, n: usize) -> usize {
        match self {
            Self::BitFlip => n,
            _ => n * n.saturating_sub(1) / 2,
        }
    }
}

impl fmt::Display for NeighborhoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::BitFlip => "bit-flip",
            Self::PairFlip => "pair-flip",
            Self::Reversal => "reversal",
            Self::Swap => "swap",
        };
        f.write_str(s)
    }
}

impl FromStr for NeighborhoodKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bit-flip" | "bitflip" | "flip" => Ok(Self::BitFlip),
            "pair-flip" | "pairflip" | "two-flip" => Ok(Self::PairFlip),
            "reversal" | "2-opt" | "two-opt" => Ok(Self::Reversal),
            "swap" => Ok(Self::Swap),
            _ => Err(ConfigError::UnknownNeighborhood(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::{BitFlip, NeighborhoodPolicy, PairFlip, Reversal, Swap};

    #[test]
    fn test_knapsack_long_name() {
        assert_eq!(NeighborhoodKind::for_problem("Knapsack01"), Some(NeighborhoodKind::PairFlip));
    }

    #[test]
    fn test_move_count_matches_policies() {
        let n = 7;
        assert_eq!(NeighborhoodKind::BitFlip.move_count(n), BitFlip.generate_moves(n).len());
        assert_eq!(NeighborhoodKind::PairFlip.move_count(n), PairFlip.generate_moves(n).len());
        assert_eq!(
            NeighborhoodKind::Reversal.move_count(n),
            NeighborhoodPolicy::<usize>::generate_moves(&Reversal, n).len()
        );
        assert_eq!(
            NeighborhoodKind::Swap.move_count(n),
            NeighborhoodPolicy::<usize>::generate_moves(&Swap, n).len()
        );
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in [
            NeighborhoodKind::BitFlip,
            NeighborhoodKind::PairFlip,
            NeighborhoodKind::Reversal,
            NeighborhoodKind::Swap,
        ] {
            assert_eq!(kind.to_string().parse::<NeighborhoodKind>(), Ok(kind));
        }
        assert_eq!("2-opt".parse::<NeighborhoodKind>(), Ok(NeighborhoodKind::Reversal));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "or-opt".parse::<NeighborhoodKind>(),
            Err(ConfigError::UnknownNeighborhood("or-opt".into()))
        );
    }

    #[test]
    fn test_is_binary() {
        assert!(NeighborhoodKind::PairFlip.is_binary());
        assert!(!NeighborhoodKind::Swap.is_binary());
    }
}
