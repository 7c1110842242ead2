//! Game session state: board, turn, mode and the moves played so far

use rand::Rng;
use tracing::debug;

use super::board::{Board, Outcome, Player};
use crate::{
    error::IllegalMove,
    selector::{Difficulty, select_move},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Who controls Player 2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    /// Player 2 is the computer at the given difficulty
    HumanVsComputer(Difficulty),
}

impl GameMode {
    /// Difficulty of the computer player, if there is one
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer(difficulty) => Some(difficulty),
        }
    }
}

/// One game instance, owned by its caller.
///
/// Player 1 always moves first. The turn passes only after a successful move
/// that leaves the game undecided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    mode: GameMode,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game in the given mode
    pub fn new(mode: GameMode) -> Self {
        Game {
            board: Board::new(),
            to_move: Player::P1,
            mode,
            moves: Vec::new(),
        }
    }

    /// Restart: empty board, Player 1 to move, same mode
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::P1;
        self.moves.clear();
        debug!(mode = ?self.mode, "game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Moves played since the last reset
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// True when the computer controls the player to move and the game is open
    pub fn is_computer_turn(&self) -> bool {
        self.mode.difficulty().is_some()
            && self.to_move == Player::P2
            && !self.outcome().is_terminal()
    }

    /// Play a move for whoever is to move, regardless of mode
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the position is out of range, occupied, or
    /// the game is already decided. The game is unchanged on failure.
    pub fn play(&mut self, position: usize) -> Result<Outcome, IllegalMove> {
        let player = self.to_move;
        self.board.apply_move(position, player)?;
        self.moves.push(Move { position, player });

        let outcome = self.board.evaluate();
        if !outcome.is_terminal() {
            self.to_move = player.opponent();
        }

        debug!(position, %player, ?outcome, "move applied");
        Ok(outcome)
    }

    /// Play a move on behalf of a human.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play`], plus [`IllegalMove::ComputerTurn`] while the
    /// computer is to move.
    pub fn human_move(&mut self, position: usize) -> Result<Outcome, IllegalMove> {
        if self.is_computer_turn() {
            return Err(IllegalMove::ComputerTurn);
        }
        self.play(position)
    }

    /// Let the computer choose and play its move.
    ///
    /// The selector works on a copy of the board. Returns the chosen position
    /// and the resulting outcome, or `None` if no cell was free.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotComputerTurn`] when the mode has no computer
    /// or Player 1 is to move, and [`IllegalMove::GameOver`] once decided.
    pub fn computer_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<(usize, Outcome)>, crate::Error> {
        let Some(difficulty) = self.mode.difficulty() else {
            return Err(crate::Error::NotComputerTurn);
        };
        if self.outcome().is_terminal() {
            return Err(IllegalMove::GameOver.into());
        }
        if self.to_move != Player::P2 {
            return Err(crate::Error::NotComputerTurn);
        }

        let snapshot = self.board;
        let Some(position) = select_move(&snapshot, difficulty, rng) else {
            return Ok(None);
        };
        let outcome = self.play(position)?;
        Ok(Some((position, outcome)))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
