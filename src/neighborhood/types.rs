//! Move descriptors and the neighborhood policy trait.

use crate::problem::Solution;

/// One atomic neighborhood transformation.
///
/// Moves only carry indices. What an index means (a bit to flip, a
/// segment boundary, a swap partner) is up to the policy that generated
/// the move. Pair moves always satisfy `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// A single position.
    Single(usize),
    /// Two positions, `i < j`.
    Pair(usize, usize),
}

impl Move {
    /// The positions touched by this move, in ascending order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        let (first, second) = match self {
            Move::Single(i) => (i, None),
            Move::Pair(i, j) => (i, Some(j)),
        };
        std::iter::once(first).chain(second)
    }
}

/// All single-position moves `0..n`.
pub fn single_moves(n: usize) -> Vec<Move> {
    (0..n).map(Move::Single).collect()
}

/// All unordered position pairs `(i, j)` with `i < j < n`, in lexicographic order.
pub fn pair_moves(n: usize) -> Vec<Move> {
    let mut moves = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            moves.push(Move::Pair(i, j));
        }
    }
    moves
}

/// A problem-specific, stateless neighborhood definition.
///
/// The full move set of an instance depends only on its size, so
/// engines call [`generate_moves`](Self::generate_moves) once per
/// instance and reuse the result for every candidate.
///
/// # Contract
///
/// - `generate_moves` is deterministic and pure.
/// - `apply_move` never modifies its input. It returns an independent
///   copy with the move applied and its evaluation reset; the caller
///   evaluates it.
pub trait NeighborhoodPolicy<V>: Send + Sync {
    /// Short policy name for logging.
    fn name(&self) -> &'static str;

    /// The ordered move set for an instance with `size` variables.
    fn generate_moves(&self, size: usize) -> Vec<Move>;

    /// Returns an unevaluated copy of `solution` with `mv` applied.
    fn apply_move(&self, solution: &Solution<V>, mv: Move) -> Solution<V>;
}
