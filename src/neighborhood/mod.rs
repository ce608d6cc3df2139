//! Neighborhood definitions for Pareto local search.
//!
//! A neighborhood is split into two parts: an ordered, reusable move set
//! that depends only on instance size, and a mutation that applies one
//! move to a solution. Engines generate the move set once per instance
//! through [`MoveSetCache`] and apply moves one at a time.
//!
//! # Key Types
//!
//! - [`Move`]: immutable move descriptor (one or two positions)
//! - [`NeighborhoodPolicy`]: move generation and application
//! - [`MoveSetCache`]: per-instance move-set cache owned by an engine
//! - [`NeighborhoodKind`]: policy names and per-family defaults
//!
//! # Policies
//!
//! - [`BitFlip`], [`PairFlip`] for binary encodings
//! - [`Reversal`], [`Swap`] for permutations

mod cache;
mod kind;
mod policies;
mod types;

pub use cache::MoveSetCache;
pub use kind::NeighborhoodKind;
pub use policies::{BitFlip, PairFlip, Reversal, Swap};
pub use types::{pair_moves, single_moves, Move, NeighborhoodPolicy};
