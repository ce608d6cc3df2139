//! Pareto local search for multi-objective combinatorial optimization.
//!
//! Approximates the Pareto front of bi- and multi-objective knapsack,
//! NK-landscape, TSP and QAP instances by neighbourhood exploration around
//! a non-dominated archive:
//!
//! - **Pareto archive**: a minimal mutually non-dominated solution set
//!   with pluggable dominance (constrained or plain Pareto).
//! - **Neighbourhoods**: bit flip, pair flip, 2-opt reversal and swap,
//!   split into a reusable move set and a move application.
//! - **PLS**: Pareto Local Search, exploring every move of every archive
//!   member until a Pareto local optimum is reached.
//! - **ATPLS**: anytime PLS, with configurable candidate selection,
//!   acceptance and explore breadth so that truncated runs still return
//!   a well-spread front.
//!
//! # Architecture
//!
//! Problems only evaluate solutions; engines own every piece of run
//! state (archive, frontier, move cache, PRNG). Runs are sequential and
//! reproducible from a seed. Independent runs can be spread over threads
//! by the caller.
//!
//! # Logging
//!
//! Progress is reported through the [`log`] facade. No logger is
//! installed; binaries and tests choose their own.

pub mod atpls;
pub mod error;
pub mod neighborhood;
pub mod pareto;
pub mod pls;
pub mod problem;
pub mod search;

pub use error::ConfigError;
