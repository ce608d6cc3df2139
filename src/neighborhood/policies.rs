//! Concrete neighborhood policies for binary and permutation encodings.
//!
//! | Policy       | Encoding    | Move set        | Transformation                 |
//! |--------------|-------------|-----------------|--------------------------------|
//! | [`BitFlip`]  | binary      | `n`             | flip one bit                   |
//! | [`PairFlip`] | binary      | `n(n-1)/2`      | flip two bits                  |
//! | [`Reversal`] | permutation | `n(n-1)/2`      | reverse segment `i..=j` (2-opt) |
//! | [`Swap`]     | permutation | `n(n-1)/2`      | swap elements `i` and `j`      |

use super::types::{pair_moves, single_moves, Move, NeighborhoodPolicy};
use crate::problem::Solution;

fn fresh_copy<V: Clone>(solution: &Solution<V>) -> Solution<V> {
    let mut copy = solution.clone();
    copy.reset_evaluation();
    copy
}

fn flip_bits(solution: &Solution<bool>, mv: Move) -> Solution<bool> {
    let mut neighbor = fresh_copy(solution);
    for i in mv.indices() {
        neighbor.variables[i] = !neighbor.variables[i];
    }
    neighbor
}

/// Single-bit flip neighborhood.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitFlip;

impl NeighborhoodPolicy<bool> for BitFlip {
    fn name(&self) -> &'static str {
        "bit-flip"
    }

    fn generate_moves(&self, size: usize) -> Vec<Move> {
        single_moves(size)
    }

    fn apply_move(&self, solution: &Solution<bool>, mv: Move) -> Solution<bool> {
        flip_bits(solution, mv)
    }
}

/// Two-bit flip neighborhood.
///
/// Keeps the number of packed items in a knapsack unchanged when one
/// bit is set and the other clear, which makes it an exchange move.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairFlip;

impl NeighborhoodPolicy<bool> for PairFlip {
    fn name(&self) -> &'static str {
        "pair-flip"
    }

    fn generate_moves(&self, size: usize) -> Vec<Move> {
        pair_moves(size)
    }

    fn apply_move(&self, solution: &Solution<bool>, mv: Move) -> Solution<bool> {
        flip_bits(solution, mv)
    }
}

/// Segment reversal (2-opt) neighborhood.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversal;

impl<V: Clone + Send + Sync> NeighborhoodPolicy<V> for Reversal {
    fn name(&self) -> &'static str {
        "reversal"
    }

    fn generate_moves(&self, size: usize) -> Vec<Move> {
        pair_moves(size)
    }

    fn apply_move(&self, solution: &Solution<V>, mv: Move) -> Solution<V> {
        debug_assert!(matches!(mv, Move::Pair(..)), "reversal expects pair moves");
        let mut neighbor = fresh_copy(solution);
        if let Move::Pair(i, j) = mv {
            neighbor.variables[i..=j].reverse();
        }
        neighbor
    }
}

/// Pairwise swap neighborhood.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swap;

impl<V: Clone + Send + Sync> NeighborhoodPolicy<V> for Swap {
    fn name(&self) -> &'static str {
        "swap"
    }

    fn generate_moves(&self, size: usize) -> Vec<Move> {
        pair_moves(size)
    }

    fn apply_move(&self, solution: &Solution<V>, mv: Move) -> Solution<V> {
        debug_assert!(matches!(mv, Move::Pair(..)), "swap expects pair moves");
        let mut neighbor = fresh_copy(solution);
        if let Move::Pair(i, j) = mv {
            neighbor.variables.swap(i, j);
        }
        neighbor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluated<V>(variables: Vec<V>) -> Solution<V> {
        Solution {
            variables,
            objectives: vec![7.0, 8.0],
            constraints: vec![1.0],
        }
    }

    #[test]
    fn test_bit_flip() {
        let parent = evaluated(vec![false, true, false]);
        let nb = BitFlip.apply_move(&parent, Move::Single(1));
        assert_eq!(nb.variables, vec![false, false, false]);
        assert_eq!(parent.variables, vec![false, true, false]);
    }

    #[test]
    fn test_neighbor_is_unevaluated() {
        let parent = evaluated(vec![false, true]);
        let nb = BitFlip.apply_move(&parent, Move::Single(0));
        assert_eq!(nb.objectives, vec![0.0, 0.0]);
        assert_eq!(nb.constraints, vec![0.0]);
        assert_eq!(parent.objectives, vec![7.0, 8.0]);
    }

    #[test]
    fn test_pair_flip() {
        let parent = evaluated(vec![true, false, false, true]);
        let nb = PairFlip.apply_move(&parent, Move::Pair(0, 2));
        assert_eq!(nb.variables, vec![false, false, true, true]);
        assert_eq!(PairFlip.generate_moves(4).len(), 6);
    }

    #[test]
    fn test_reversal_is_inclusive() {
        let parent = evaluated(vec![0usize, 1, 2, 3, 4]);
        let nb = Reversal.apply_move(&parent, Move::Pair(1, 3));
        assert_eq!(nb.variables, vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_swap() {
        let parent = evaluated(vec![0usize, 1, 2, 3]);
        let nb = Swap.apply_move(&parent, Move::Pair(0, 3));
        assert_eq!(nb.variables, vec![3, 1, 2, 0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "expects pair moves")]
    fn test_swap_rejects_single_move() {
        let parent = evaluated(vec![0usize, 1, 2]);
        Swap.apply_move(&parent, Move::Single(1));
    }

    #[test]
    fn test_move_set_sizes() {
        assert_eq!(BitFlip.generate_moves(6).len(), 6);
        assert_eq!(NeighborhoodPolicy::<usize>::generate_moves(&Reversal, 6).len(), 15);
        assert_eq!(NeighborhoodPolicy::<usize>::generate_moves(&Swap, 6).len(), 15);
    }
}
