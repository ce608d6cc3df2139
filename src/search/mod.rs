//! Shared machinery for the Pareto local search engines.
//!
//! # Key Types
//!
//! - [`EvaluationBudget`]: evaluation counter with a hard cap
//! - [`ExploreFrontier`]: archive members still awaiting exploration
//! - [`SearchSnapshot`] / [`Monitor`]: per-candidate progress callback
//! - [`ParetoResult`]: final front plus run statistics
//! - [`LocalSearch`]: PLS and anytime PLS behind one interface
//! - [`run_repeated`]: independent runs, on rayon with the `parallel` feature

mod batch;
mod budget;
pub(crate) mod engine;
mod frontier;
mod types;
mod variant;

pub use batch::run_repeated;
pub use budget::EvaluationBudget;
pub use frontier::ExploreFrontier;
pub use types::{Monitor, ParetoResult, SearchSnapshot, SearchState, Termination};
pub use variant::LocalSearch;
