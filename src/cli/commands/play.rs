//! Play command - interactive game in the terminal

use std::{
    io::{self, BufRead, Write},
    thread,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::{
    cli::{
        config::SessionArgs,
        output::{announcement, render_board, turn_prompt},
    },
    session::SessionConfig,
    tictactoe::Game,
};

#[derive(Parser, Debug)]
#[command(about = "Play a game in the terminal")]
pub struct PlayArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args
        .session
        .resolve()
        .context("failed to load session configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&config, stdin.lock(), stdout.lock())
}

/// What the player typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Cell(usize),
    Restart,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "restart" => Command::Restart,
        other => match other.parse::<usize>() {
            Ok(n @ 1..=9) => Command::Cell(n - 1),
            _ => Command::Unknown,
        },
    }
}

/// Drive one play session over arbitrary input and output streams.
///
/// Ends on `q` or end of input. After a decided game the player is asked
/// whether to play again.
pub fn run_session<R: BufRead, W: Write>(
    config: &SessionConfig,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let symbols = config.symbols();
    let mut rng = config.rng();
    let mut game = Game::new(config.game_mode());
    let mut line = String::new();

    debug!(mode = ?game.mode(), "session started");

    loop {
        writeln!(out, "\n{}\n", render_board(game.board(), &symbols))?;

        if let Some(message) = announcement(game.board(), &symbols) {
            writeln!(out, "{message}")?;
            write!(out, "Play again? [y/N]: ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 || !line.trim().eq_ignore_ascii_case("y") {
                break;
            }
            game.reset();
            continue;
        }

        if game.is_computer_turn() {
            let symbol = symbols.for_player(game.to_move());
            writeln!(out, "{symbol} is thinking...")?;
            out.flush()?;
            thread::sleep(config.think_delay());

            if let Some((position, _)) = game.computer_move(&mut rng)? {
                writeln!(out, "{symbol} plays {}", position + 1)?;
            }
            continue;
        }

        write!(out, "{}", turn_prompt(game.to_move(), &symbols))?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::Restart => game.reset(),
            Command::Cell(position) => {
                if let Err(err) = game.human_move(position) {
                    // Rejected moves are ignored; the same player tries again
                    writeln!(out, "{err}")?;
                }
            }
            Command::Unknown => writeln!(out, "Enter a cell number from 1 to 9")?,
        }
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}
