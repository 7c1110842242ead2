//! Observer port for watching arena matches

use crate::{Result, tictactoe::Outcome};

/// Receives match progress. All methods default to no-ops.
///
/// Call order: `on_match_start` once, `on_game_end` after every game,
/// `on_match_end` once.
pub trait MatchObserver {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// `game_num` is 1-based
    fn on_game_end(&mut self, _game_num: usize, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
