//! Pareto dominance and the non-dominated archive.
//!
//! # Key Types
//!
//! - [`Dominance`]: three-way comparison result (`-1 / 0 / +1`)
//! - [`DominanceComparator`]: pluggable comparison strategy
//! - [`ConstrainedDominance`]: violation first, then objectives (default)
//! - [`ParetoDominance`]: objectives only
//! - [`ParetoArchive`]: minimal mutually non-dominated solution set
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//!   (constrained-domination principle)

mod archive;
mod dominance;

pub use archive::{Admission, MemberId, ParetoArchive};
pub use dominance::{
    pareto_dominance, ConstrainedDominance, Dominance, DominanceComparator, ParetoDominance,
};
