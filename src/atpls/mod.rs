//! Anytime Pareto Local Search (ATPLS).
//!
//! Generalizes [PLS](crate::pls) so that a run cut short by its budget
//! still returns a well-spread front. Candidate selection, acceptance and
//! explore breadth are independent policies; see [`AtplsConfig`].
//!
//! # Key Types
//!
//! - [`Atpls`]: the engine, with an external archive of every evaluated solution
//! - [`AcceptancePolicy`], [`ExploreBreadth`], [`CandidateSelection`]: policy axes
//! - [`hypervolume_gap_index`]: the gap-filling selection rule
//!
//! # References
//!
//! - Dubois-Lacoste, López-Ibáñez & Stützle (2015), "Anytime Pareto local search"
//! - Liefooghe et al. (2012), "On dominance-based multiobjective local search:
//!   design, implementation and experimental analysis on scheduling and
//!   traveling salesman problems"

mod config;
mod runner;
mod selection;

pub use config::{AcceptancePolicy, AtplsConfig, CandidateSelection, ExploreBreadth};
pub use runner::{Atpls, AtplsRunner};
pub use selection::hypervolume_gap_index;
