//! Multi-objective problem definitions.
//!
//! The engines only see the [`MoProblem`] trait. The models in this
//! module cover the four problem families the engines were tuned on;
//! each one evaluates caller-supplied instance data.
//!
//! # Key Types
//!
//! - [`Solution`]: decision variables plus objective and constraint vectors
//! - [`MoProblem`]: shape, random creation and in-place evaluation
//!
//! # Models
//!
//! - [`Knapsack`]: multi-objective 0/1 knapsack (binary, one capacity constraint)
//! - [`NkLandscape`]: multi-objective NK-landscape (binary)
//! - [`Tsp`]: multi-objective traveling salesman (permutation)
//! - [`Qap`]: multi-objective quadratic assignment (permutation)

mod knapsack;
mod nk;
mod qap;
mod tsp;
mod types;

pub use knapsack::Knapsack;
pub use nk::NkLandscape;
pub use qap::Qap;
pub use tsp::Tsp;
pub use types::{MoProblem, Solution};
