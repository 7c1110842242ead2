//! Terminal rendering and progress bars

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    arena::MatchResult,
    ports::MatchObserver,
    session::Symbols,
    tictactoe::{Board, Outcome, Player},
};

/// Render the board with player symbols; empty cells show their 1-9 key
pub fn render_board(board: &Board, symbols: &Symbols) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                match board.cells[pos].player() {
                    Some(player) => symbols.for_player(player).to_string(),
                    None => (pos + 1).to_string(),
                }
            })
            .collect();
        rows.push(format!(" {} ", cells.join(" | ")));
    }
    rows.join("\n---+---+---\n")
}

/// Result message for a decided board, `None` while the game is ongoing
pub fn announcement(board: &Board, symbols: &Symbols) -> Option<String> {
    match board.evaluate() {
        Outcome::Ongoing => None,
        Outcome::Draw => Some("Draw!".to_string()),
        Outcome::Win(player) => {
            let mut message = format!("{} wins!", symbols.for_player(player));
            if let Some((_, line)) = board.winning_line() {
                let cells: Vec<String> = line.iter().map(|pos| (pos + 1).to_string()).collect();
                message.push_str(&format!(" (line {})", cells.join("-")));
            }
            Some(message)
        }
    }
}

/// Prompt shown to the player to move
pub fn turn_prompt(player: Player, symbols: &Symbols) -> String {
    format!(
        "{} ({player}) to move [1-9, r = restart, q = quit]: ",
        symbols.for_player(player)
    )
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a human-readable match summary
pub fn print_match_summary(result: &MatchResult) {
    print_section(&format!("{} vs {}", result.p1, result.p2));
    print_kv("Games", &result.games.to_string());
    print_kv(
        "Player 1 wins",
        &format!("{} ({:.1}%)", result.p1_wins, result.p1_win_rate() * 100.0),
    );
    print_kv(
        "Player 2 wins",
        &format!("{} ({:.1}%)", result.p2_wins, result.p2_win_rate() * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate() * 100.0),
    );
}

/// Progress bar observer for arena matches
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    p1_wins: usize,
    p2_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            p1_wins: 0,
            p2_wins: 0,
            draws: 0,
        }
    }

    fn tally(&self) -> String {
        format!("P1:{} P2:{} D:{}", self.p1_wins, self.p2_wins, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchObserver for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Win(Player::P1) => self.p1_wins += 1,
            Outcome::Win(Player::P2) => self.p2_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}
