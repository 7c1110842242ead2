//! Tic-Tac-Toe board model and game state

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BOARD_SIZE, Board, Cell, Outcome, Player};
pub use game::{Game, GameMode, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
