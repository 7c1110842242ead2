//! Hard tier: exhaustive minimax search
//!
//! Leaves score `+10` for a win by the searching player, `-10` for a loss and
//! `0` for a draw. Scores are not adjusted for depth, so a slow forced win
//! ranks the same as an immediate one; ties go to the lowest index. No
//! pruning and no transposition table: the full tree from an empty board is
//! about 550 thousand nodes.
//!
//! Boards are `Copy`, so every recursive call receives its own board value
//! and nothing is ever reverted.

use tracing::trace;

use crate::tictactoe::{Board, Outcome, Player};

/// Score of a won leaf from the winner's point of view
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn leaf
pub const DRAW_SCORE: i32 = 0;

/// Minimax searcher that counts the nodes it visits
#[derive(Debug, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited since creation
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Value of `board` with `to_move` to play, from `maximizer`'s side
    pub fn value(&mut self, board: Board, to_move: Player, maximizer: Player) -> i32 {
        self.nodes += 1;

        match board.evaluate() {
            Outcome::Win(winner) if winner == maximizer => return WIN_SCORE,
            Outcome::Win(_) => return -WIN_SCORE,
            Outcome::Draw => return DRAW_SCORE,
            Outcome::Ongoing => {}
        }

        let mut best = if to_move == maximizer {
            i32::MIN
        } else {
            i32::MAX
        };

        for pos in board.empty_positions() {
            let child = self.value(board.placed(pos, to_move), to_move.opponent(), maximizer);
            best = if to_move == maximizer {
                best.max(child)
            } else {
                best.min(child)
            };
        }

        best
    }

    /// Evaluate every empty cell as `player`'s next move.
    ///
    /// Children of the root are always expanded, even if the root itself is
    /// already decided, so callers get an answer whenever a cell is free.
    pub fn evaluate_moves(&mut self, board: &Board, player: Player) -> Vec<(usize, i32)> {
        board
            .empty_positions()
            .into_iter()
            .map(|pos| {
                let value = self.value(board.placed(pos, player), player.opponent(), player);
                (pos, value)
            })
            .collect()
    }

    /// Highest-scoring move for `player`, lowest index on ties
    pub fn best_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (pos, value) in self.evaluate_moves(board, player) {
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((pos, value));
            }
        }
        best.map(|(pos, _)| pos)
    }
}

/// Run a fresh search and return the optimal move for `player`
pub fn best_move(board: &Board, player: Player) -> Option<usize> {
    let mut search = Minimax::new();
    let choice = search.best_move(board, player);
    trace!(nodes = search.nodes(), ?choice, "minimax search finished");
    choice
}
