//! Normal tier: one-ply lookahead
//!
//! Priority order:
//! 1. Complete our own line (lowest index first)
//! 2. Block the opponent's line (lowest index first)
//! 3. Fall back to a uniformly random empty cell

use rand::{Rng, seq::IndexedRandom};

use crate::tictactoe::{Board, Player};

/// Pick a move for `player` using the win/block/random priority
pub fn choose<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> Option<usize> {
    let empty = board.empty_positions();

    completing_move(board, &empty, player)
        .or_else(|| completing_move(board, &empty, player.opponent()))
        .or_else(|| empty.choose(rng).copied())
}

/// First candidate at which `player` would have three in a row.
///
/// Each candidate is tried on its own copy of the board.
pub fn completing_move(board: &Board, candidates: &[usize], player: Player) -> Option<usize> {
    candidates
        .iter()
        .copied()
        .find(|&pos| board.placed(pos, player).has_won(player))
}
