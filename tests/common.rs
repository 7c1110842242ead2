//! Common test utilities for the noughts test suite.

#![allow(dead_code)]

use noughts::{Board, Difficulty, Outcome, Player, select_move_for};
use rand::{SeedableRng, rngs::StdRng};

/// Parse a board, panicking on malformed test input
pub fn board(text: &str) -> Board {
    Board::from_string(text).unwrap_or_else(|e| panic!("bad test board '{text}': {e}"))
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Walk every line of play in which `hard` answers with the Hard tier and
/// its opponent tries every legal reply. Returns the number of finished
/// games and panics if `hard` ever loses.
pub fn explore_against_all_replies(board: Board, to_move: Player, hard: Player) -> usize {
    match board.evaluate() {
        Outcome::Win(winner) => {
            assert_eq!(winner, hard, "Hard tier lost on board\n{board}");
            return 1;
        }
        Outcome::Draw => return 1,
        Outcome::Ongoing => {}
    }

    if to_move == hard {
        // Hard ignores the random source
        let pos = select_move_for(&board, hard, Difficulty::Hard, &mut seeded(0))
            .expect("ongoing board has an empty cell");
        let next = board.with_move(pos, hard).expect("Hard chose a legal cell");
        explore_against_all_replies(next, to_move.opponent(), hard)
    } else {
        board
            .empty_positions()
            .into_iter()
            .map(|pos| {
                let next = board.with_move(pos, to_move).expect("empty cell is legal");
                explore_against_all_replies(next, to_move.opponent(), hard)
            })
            .sum()
    }
}
