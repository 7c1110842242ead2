//! Headless matches between move sources
//!
//! Used to check the computer tiers against each other, e.g. that Hard never
//! loses, and by the `noughts arena` command.

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::{MatchObserver, MoveSource},
    selector::{Difficulty, select_move_for},
    tictactoe::{Board, Game, GameMode, Outcome, Player},
};

/// Computer player at a fixed difficulty with its own random source
pub struct ComputerPlayer {
    name: String,
    difficulty: Difficulty,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Create a computer player with a deterministic seed
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            name: format!("computer ({difficulty})"),
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for ComputerPlayer {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        select_move_for(board, player, self.difficulty, &mut self.rng).ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl MatchObserver for NullObserver {}

/// Tally of a match, from Player 1's seat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub p1: String,
    pub p2: String,
    pub games: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub draws: usize,
}

impl MatchResult {
    pub fn new(p1: String, p2: String) -> Self {
        Self {
            p1,
            p2,
            ..Self::default()
        }
    }

    /// Record a finished game
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::P1) => self.p1_wins += 1,
            Outcome::Win(Player::P2) => self.p2_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => return,
        }
        self.games += 1;
    }

    pub fn p1_win_rate(&self) -> f64 {
        rate(self.p1_wins, self.games)
    }

    pub fn p2_win_rate(&self) -> f64 {
        rate(self.p2_wins, self.games)
    }

    pub fn draw_rate(&self) -> f64 {
        rate(self.draws, self.games)
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Plays complete games between two move sources
pub struct Arena {
    players: [Box<dyn MoveSource>; 2],
}

impl Arena {
    pub fn new(p1: Box<dyn MoveSource>, p2: Box<dyn MoveSource>) -> Self {
        Self { players: [p1, p2] }
    }

    /// Arena between two computer tiers, seeded for reproducible results
    pub fn between(p1: Difficulty, p2: Difficulty, seed: u64) -> Self {
        Self::new(
            Box::new(ComputerPlayer::with_seed(p1, seed)),
            Box::new(ComputerPlayer::with_seed(p2, seed.wrapping_add(1))),
        )
    }

    /// Play one game from an empty board and return the finished game.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot produce a move or produces an
    /// illegal one.
    pub fn play_game(&mut self) -> Result<Game> {
        // Both seats are driven from here, so the game itself needs no computer
        let mut game = Game::new(GameMode::HumanVsHuman);

        while !game.outcome().is_terminal() {
            let player = game.to_move();
            let seat = match player {
                Player::P1 => 0,
                Player::P2 => 1,
            };
            let position = self.players[seat].select_move(game.board(), player)?;
            game.play(position)?;
        }

        debug!(moves = game.moves().len(), outcome = ?game.outcome(), "arena game finished");
        Ok(game)
    }

    /// Play `games` games and tally the outcomes.
    ///
    /// # Errors
    ///
    /// Propagates move-source and observer errors.
    pub fn run(&mut self, games: usize, observer: &mut dyn MatchObserver) -> Result<MatchResult> {
        let mut result = MatchResult::new(
            self.players[0].name().to_string(),
            self.players[1].name().to_string(),
        );

        observer.on_match_start(games)?;
        for game_num in 1..=games {
            let outcome = self.play_game()?.outcome();
            result.record(outcome);
            observer.on_game_end(game_num, outcome)?;
        }
        observer.on_match_end()?;

        info!(
            p1 = %result.p1,
            p2 = %result.p2,
            p1_wins = result.p1_wins,
            p2_wins = result.p2_wins,
            draws = result.draws,
            "match finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        moves: Vec<usize>,
    }

    impl MoveSource for Scripted {
        fn select_move(&mut self, _board: &Board, _player: Player) -> Result<usize> {
            if self.moves.is_empty() {
                return Err(Error::NoValidMoves);
            }
            Ok(self.moves.remove(0))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    struct FirstEmpty;

    impl MoveSource for FirstEmpty {
        fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize> {
            board
                .empty_positions()
                .first()
                .copied()
                .ok_or(Error::NoValidMoves)
        }

        fn name(&self) -> &str {
            "first-empty"
        }
    }

    #[derive(Default)]
    struct Counting {
        started: Option<usize>,
        ended: usize,
        finished: bool,
    }

    impl MatchObserver for Counting {
        fn on_match_start(&mut self, total_games: usize) -> Result<()> {
            self.started = Some(total_games);
            Ok(())
        }

        fn on_game_end(&mut self, game_num: usize, _outcome: Outcome) -> Result<()> {
            self.ended = game_num;
            Ok(())
        }

        fn on_match_end(&mut self) -> Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn test_scripted_game() {
        let mut arena = Arena::new(
            Box::new(Scripted {
                moves: vec![0, 1, 2],
            }),
            Box::new(Scripted { moves: vec![4, 7] }),
        );
        let game = arena.play_game().unwrap();
        assert_eq!(game.outcome(), Outcome::Win(Player::P1));
        assert_eq!(game.moves().len(), 5);
    }

    #[test]
    fn test_illegal_scripted_move_is_an_error() {
        let mut arena = Arena::new(
            Box::new(Scripted { moves: vec![0, 1] }),
            Box::new(Scripted { moves: vec![0] }),
        );
        assert!(matches!(
            arena.play_game(),
            Err(Error::IllegalMove(crate::error::IllegalMove::Occupied {
                position: 0
            }))
        ));
    }

    #[test]
    fn test_any_source_takes_either_seat() {
        let hard = || Box::new(ComputerPlayer::with_seed(Difficulty::Hard, 3));

        let mut arena = Arena::new(Box::new(FirstEmpty), hard());
        let result = arena.run(1, &mut NullObserver).unwrap();
        assert_eq!(result.p1, "first-empty");
        assert_eq!(result.p1_wins, 0);

        let mut arena = Arena::new(hard(), Box::new(FirstEmpty));
        let result = arena.run(1, &mut NullObserver).unwrap();
        assert_eq!(result.p2, "first-empty");
        assert_eq!(result.p2_wins, 0);
    }

    #[test]
    fn test_hard_vs_hard_always_draws() {
        let mut arena = Arena::between(Difficulty::Hard, Difficulty::Hard, 1);
        let result = arena.run(2, &mut NullObserver).unwrap();
        assert_eq!(result.draws, 2);
        assert_eq!(result.draw_rate(), 1.0);
    }

    #[test]
    fn test_observer_sees_every_game() {
        let mut arena = Arena::between(Difficulty::Easy, Difficulty::Normal, 5);
        let mut observer = Counting::default();
        let result = arena.run(20, &mut observer).unwrap();
        assert_eq!(observer.started, Some(20));
        assert_eq!(observer.ended, 20);
        assert!(observer.finished);
        assert_eq!(result.games, 20);
        assert_eq!(result.p1_wins + result.p2_wins + result.draws, 20);
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = Arena::between(Difficulty::Easy, Difficulty::Easy, 77)
            .run(30, &mut NullObserver)
            .unwrap();
        let b = Arena::between(Difficulty::Easy, Difficulty::Easy, 77)
            .run(30, &mut NullObserver)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rates_on_empty_result() {
        let result = MatchResult::new("a".into(), "b".into());
        assert_eq!(result.p1_win_rate(), 0.0);
        assert_eq!(result.draw_rate(), 0.0);
    }
}
