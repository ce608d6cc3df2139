//! Pareto Local Search (PLS).
//!
//! Explores the neighbourhood of archive members one at a time, keeping
//! every non-dominated neighbour. A candidate's whole move set is
//! evaluated before the next candidate is drawn, so a run that stops
//! early on budget may leave most of the frontier unexplored.
//!
//! # References
//!
//! - Paquete, Chiarandini & Stützle (2004), "Pareto Local Optimum Sets in the
//!   Biobjective Traveling Salesman Problem"
//! - Angel, Bampis & Gourvès (2004), "A Dynasearch Neighborhood for the
//!   Bicriteria Traveling Salesman Problem"

mod config;
mod runner;

pub use config::PlsConfig;
pub use runner::{Pls, PlsRunner};
