//! Session flags shared by CLI commands

use std::path::PathBuf;

use clap::Args;

use crate::{
    Result,
    selector::Difficulty,
    session::{ModeKind, SessionConfig},
};

/// Flags that override the optional JSON configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Game mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeKind>,

    /// Computer difficulty (pvc only)
    #[arg(long, short = 'd', value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Player 1 symbol
    #[arg(long)]
    pub p1: Option<String>,

    /// Player 2 symbol
    #[arg(long)]
    pub p2: Option<String>,

    /// Pause before the computer's move is shown, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SessionArgs {
    /// Load the configuration file (if any) and apply flag overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration file cannot be read or parsed.
    pub fn resolve(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_file(path)?,
            None => SessionConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(p1) = &self.p1 {
            config.p1_symbol = p1.clone();
        }
        if let Some(p2) = &self.p2 {
            config.p2_symbol = p2.clone();
        }
        if let Some(delay) = self.delay_ms {
            config.think_delay_ms = delay;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}
