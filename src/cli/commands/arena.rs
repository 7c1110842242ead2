//! Arena command - pit two computer tiers against each other

use anyhow::{Context, Result};
use clap::Parser;
use rand::random;

use crate::{
    Error,
    arena::{Arena, NullObserver},
    cli::output::{ProgressObserver, print_match_summary},
    ports::MatchObserver,
    selector::Difficulty,
};

#[derive(Parser, Debug)]
#[command(about = "Play computer tiers against each other")]
pub struct ArenaArgs {
    /// Difficulty of Player 1
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    pub p1: Difficulty,

    /// Difficulty of Player 2
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    pub p2: Difficulty,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: ArenaArgs) -> Result<()> {
    if args.games == 0 {
        return Err(Error::InvalidConfiguration {
            message: "--games must be at least 1".to_string(),
        }
        .into());
    }

    let seed = args.seed.unwrap_or_else(random);
    let mut arena = Arena::between(args.p1, args.p2, seed);

    let mut observer: Box<dyn MatchObserver> = if args.no_progress || args.json {
        Box::new(NullObserver)
    } else {
        Box::new(ProgressObserver::new())
    };

    let result = arena
        .run(args.games, observer.as_mut())
        .context("arena match failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_match_summary(&result);
        println!("  {:20} {seed}", "Seed:");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_games_rejected() {
        let args = ArenaArgs {
            p1: Difficulty::Easy,
            p2: Difficulty::Easy,
            games: 0,
            seed: Some(1),
            json: true,
            no_progress: true,
        };
        let err = execute(args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidConfiguration { .. })
        ));
    }
}
