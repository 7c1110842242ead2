//! Computer move selection
//!
//! A pure function per call: the board is taken by reference and copied
//! before any provisional placement, so the caller's board is never touched.
//! The random source is always injected so callers (and tests) control
//! determinism.
//!
//! ```
//! use noughts::selector::{Difficulty, select_move};
//! use noughts::tictactoe::Board;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let board = Board::from_string("OO. ... ...").unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! assert_eq!(select_move(&board, Difficulty::Normal, &mut rng), Some(2));
//! ```

pub mod heuristic;
pub mod minimax;
pub mod random;

use std::fmt;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::tictactoe::{Board, Player};

/// Strength of the computer opponent
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell
    #[default]
    Easy,
    /// Win if possible, otherwise block, otherwise random
    Normal,
    /// Full minimax search
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Choose a cell for the computer, which always plays as Player 2.
///
/// Returns `None` only when the board has no empty cell.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    select_move_for(board, Player::P2, difficulty, rng)
}

/// Choose a cell for `player` at the given difficulty.
#[instrument(level = "debug", skip(board, rng))]
pub fn select_move_for<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    let snapshot = *board;
    let choice = match difficulty {
        Difficulty::Easy => random::choose(&snapshot, rng),
        Difficulty::Normal => heuristic::choose(&snapshot, player, rng),
        Difficulty::Hard => minimax::best_move(&snapshot, player),
    };
    debug!(?choice, "computer selected move");
    choice
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_string("XOX XOO OXX").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(select_move(&board, difficulty, &mut rng), None);
        }
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let board = Board::from_string("XOX XO. OXO").unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(select_move(&board, difficulty, &mut rng), Some(5));
        }
    }

    #[test]
    fn test_decided_board_with_empty_cells_still_answers() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let choice = select_move(&board, difficulty, &mut rng).unwrap();
            assert!(board.is_empty(choice));
        }
    }

    #[test]
    fn test_difficulty_serde_names() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Normal).unwrap(),
            "\"normal\""
        );
        let hard: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(hard, Difficulty::Hard);
        assert_eq!(Difficulty::default(), Difficulty::Easy);
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
