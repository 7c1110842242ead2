//! Easy tier: uniform choice among empty cells

use rand::{Rng, seq::IndexedRandom};

use crate::tictactoe::Board;

/// Pick any empty cell with equal probability
pub fn choose<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_positions().choose(rng).copied()
}
