//! Board representation, move legality and terminal evaluation

use std::fmt;

use super::lines::LineAnalyzer;
use crate::error::IllegalMove;

/// Number of cells on the board
pub const BOARD_SIZE: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    P1,
    P2,
}

impl Cell {
    /// Debug character for this cell. Display symbols are a presentation
    /// concern and live in the session configuration.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::P1 => 'X',
            Cell::P2 => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' | '1' => Some(Cell::P1),
            'O' | 'o' | '2' => Some(Cell::P2),
            _ => None,
        }
    }

    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::P1 => Some(Player::P1),
            Cell::P2 => Some(Player::P2),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. Player 1 always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::P1 => Cell::P1,
            Player::P2 => Cell::P2,
        }
    }

    /// Human-facing player number (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::P1 => 1,
            Player::P2 => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Result of evaluating a board. Derived from the cells, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}

/// The 3x3 grid in row-major order (index = row * 3 + col).
///
/// `Board` is `Copy` (9 bytes), so search code passes boards by value instead
/// of placing and reverting pieces on a shared grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Wrap an explicit set of cells. No legality checks are made, so this
    /// can describe positions unreachable in play.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Parse a board from 9 cell characters (whitespace and `|` are ignored).
    ///
    /// Accepts `.`, `_` or `-` for empty cells, `X`, `x` or `1` for Player 1
    /// and `O`, `o` or `2` for Player 2.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not contain exactly 9 cells or any
    /// character is not a valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();

        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardString {
                input: s.to_string(),
                reason: format!("expected {BOARD_SIZE} cells, got {}", chars.len()),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidBoardString {
                input: s.to_string(),
                reason: format!("invalid character '{c}' at position {i}"),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8), `None` when out of range
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Get all empty positions in increasing index order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Place `player` at `pos`.
    ///
    /// # Errors
    ///
    /// Fails with [`IllegalMove`] if `pos` is outside 0-8, if the game is
    /// already decided, or if the cell is occupied. The board is unchanged on
    /// failure. Turn order is the caller's concern.
    pub fn apply_move(&mut self, pos: usize, player: Player) -> Result<(), IllegalMove> {
        if pos >= BOARD_SIZE {
            return Err(IllegalMove::OutOfBounds { position: pos });
        }

        if self.is_terminal() {
            return Err(IllegalMove::GameOver);
        }

        if !self.is_empty(pos) {
            return Err(IllegalMove::Occupied { position: pos });
        }

        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Same as [`Board::apply_move`] but returns a new board
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, pos: usize, player: Player) -> Result<Board, IllegalMove> {
        let mut next = *self;
        next.apply_move(pos, player)?;
        Ok(next)
    }

    /// Copy of the board with `player` at `pos`, without legality checks.
    /// Callers pass positions taken from [`Board::empty_positions`].
    #[must_use]
    pub(crate) fn placed(&self, pos: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[pos] = player.to_cell();
        next
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Evaluate the board.
    ///
    /// Player 1's lines are checked before Player 2's, so a board where both
    /// have a line (unreachable in legal play) reports `Win(P1)`.
    pub fn evaluate(&self) -> Outcome {
        if let Some(winner) = self.winner() {
            Outcome::Win(winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        [Player::P1, Player::P2]
            .into_iter()
            .find(|&player| self.has_won(player))
    }

    /// The first completed line and its owner, for drawing a strike-through
    pub fn winning_line(&self) -> Option<(Player, [usize; 3])> {
        [Player::P1, Player::P2].into_iter().find_map(|player| {
            LineAnalyzer::completed_line(&self.cells, player).map(|line| (player, line))
        })
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.evaluate().is_terminal()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
