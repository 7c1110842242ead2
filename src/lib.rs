//! Tic-Tac-Toe engine with computer opponents
//!
//! This crate provides:
//! - Board model with move legality and win/draw evaluation
//! - Game state object for human-vs-human and human-vs-computer play
//! - Computer move selection at three tiers (random, one-ply heuristic,
//!   exhaustive minimax)
//! - Headless arena for pitting tiers against each other
//! - Terminal front end

pub mod arena;
pub mod cli;
pub mod error;
pub mod ports;
pub mod selector;
pub mod session;
pub mod tictactoe;

pub use error::{Error, IllegalMove, Result};
pub use selector::{Difficulty, select_move, select_move_for};
pub use session::SessionConfig;
pub use tictactoe::{Board, Cell, Game, GameMode, Outcome, Player};
