//! Session configuration: mode, difficulty, display symbols and pacing
//!
//! Everything here is an opaque input to the game core. Symbols are purely
//! cosmetic and never reach game logic; only [`Player`] identity does.

use std::{fs, path::Path, time::Duration};

use clap::ValueEnum;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    Result,
    selector::Difficulty,
    tictactoe::{GameMode, Player},
};

/// Symbols a player may pick
pub const SYMBOLS: [&str; 10] = ["X", "O", "⭐", "❤️", "🐱", "⚡", "🍀", "🌀", "🔥", "🌙"];

/// Default pause before the computer's move is shown
pub const DEFAULT_THINK_DELAY_MS: u64 = 450;

/// Who plays Player 2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    /// Two humans at one terminal
    #[default]
    Pvp,
    /// Human against the computer
    Pvc,
}

/// Settings for one play session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub mode: ModeKind,

    /// Computer strength, only used in `pvc` mode
    pub difficulty: Difficulty,

    pub p1_symbol: String,

    pub p2_symbol: String,

    /// Pause before the computer's move is shown, in milliseconds
    pub think_delay_ms: u64,

    /// Random seed for reproducible computer play
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: ModeKind::default(),
            difficulty: Difficulty::default(),
            p1_symbol: SYMBOLS[0].to_string(),
            p2_symbol: SYMBOLS[1].to_string(),
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Load a JSON configuration file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeKind::Pvp => GameMode::HumanVsHuman,
            ModeKind::Pvc => GameMode::HumanVsComputer(self.difficulty),
        }
    }

    /// Display symbols after sanitation
    pub fn symbols(&self) -> Symbols {
        Symbols::resolve(&self.p1_symbol, &self.p2_symbol)
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Random source for computer play, seeded when a seed is configured
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

/// The two display symbols, guaranteed valid and distinct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    p1: String,
    p2: String,
}

impl Symbols {
    /// Sanitize requested symbols.
    ///
    /// An unknown Player 1 symbol becomes `X`. An unknown Player 2 symbol, or
    /// one equal to Player 1's, becomes the first allowed symbol that differs
    /// from Player 1's.
    pub fn resolve(p1: &str, p2: &str) -> Self {
        let p1 = if is_allowed(p1) {
            p1
        } else {
            warn!(requested = p1, "unknown Player 1 symbol, using X");
            SYMBOLS[0]
        };

        let p2 = if is_allowed(p2) && p2 != p1 {
            p2
        } else {
            let fallback = SYMBOLS
                .iter()
                .copied()
                .find(|&s| s != p1)
                .unwrap_or(SYMBOLS[1]);
            warn!(requested = p2, fallback, "invalid Player 2 symbol");
            fallback
        };

        Symbols {
            p1: p1.to_string(),
            p2: p2.to_string(),
        }
    }

    pub fn for_player(&self, player: Player) -> &str {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }
}

fn is_allowed(symbol: &str) -> bool {
    SYMBOLS.iter().any(|&s| s == symbol)
}

impl Default for Symbols {
    fn default() -> Self {
        Self::resolve(SYMBOLS[0], SYMBOLS[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.game_mode(), GameMode::HumanVsHuman);
        assert_eq!(config.think_delay(), Duration::from_millis(450));
        assert_eq!(config.symbols(), Symbols::default());
    }

    #[test]
    fn test_pvc_mode_carries_difficulty() {
        let config = SessionConfig {
            mode: ModeKind::Pvc,
            difficulty: Difficulty::Hard,
            ..SessionConfig::default()
        };
        assert_eq!(
            config.game_mode(),
            GameMode::HumanVsComputer(Difficulty::Hard)
        );
    }

    #[test]
    fn test_symbols_valid_pair_kept() {
        let symbols = Symbols::resolve("🔥", "🌙");
        assert_eq!(symbols.for_player(Player::P1), "🔥");
        assert_eq!(symbols.for_player(Player::P2), "🌙");
    }

    #[test]
    fn test_unknown_p1_symbol_falls_back_to_x() {
        let symbols = Symbols::resolve("Z", "O");
        assert_eq!(symbols.for_player(Player::P1), "X");
        assert_eq!(symbols.for_player(Player::P2), "O");
    }

    #[test]
    fn test_duplicate_p2_symbol_replaced() {
        let symbols = Symbols::resolve("X", "X");
        assert_eq!(symbols.for_player(Player::P2), "O");

        let symbols = Symbols::resolve("O", "O");
        assert_eq!(symbols.for_player(Player::P2), "X");

        let symbols = Symbols::resolve("⚡", "nope");
        assert_eq!(symbols.for_player(Player::P2), "X");
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::Rng;

        let config = SessionConfig {
            seed: Some(99),
            ..SessionConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"mode": "pvc", "difficulty": "normal"}"#).unwrap();
        assert_eq!(
            config.game_mode(),
            GameMode::HumanVsComputer(Difficulty::Normal)
        );
        assert_eq!(config.p1_symbol, "X");
        assert_eq!(config.think_delay_ms, DEFAULT_THINK_DELAY_MS);
        assert_eq!(config.seed, None);
    }
}
