//! Move source port - anything that can pick a cell for the player to move

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Anything the arena can ask for a move: computer tiers, or scripted
/// sources in tests.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::MoveSource,
///     tictactoe::{Board, Player},
/// };
///
/// struct FirstEmpty;
///
/// impl MoveSource for FirstEmpty {
///     fn select_move(&mut self, board: &Board, _player: Player) -> noughts::Result<usize> {
///         board
///             .empty_positions()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
///
/// let mut source = FirstEmpty;
/// assert_eq!(source.select_move(&Board::new(), Player::P1).unwrap(), 0);
/// ```
pub trait MoveSource {
    /// Select a position (0-8) for `player` on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, e.g. the board is full.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize>;

    /// Name used in summaries and logs
    fn name(&self) -> &str;
}
