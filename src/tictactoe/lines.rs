//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::completed_line(cells, player).is_some()
    }

    /// First line (in [`WINNING_LINES`] order) fully occupied by the player
    pub fn completed_line(cells: &[Cell; 9], player: Player) -> Option<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::P1;
        cells[1] = Cell::P1;
        cells[2] = Cell::P1;

        assert!(LineAnalyzer::has_won(&cells, Player::P1));
        assert!(!LineAnalyzer::has_won(&cells, Player::P2));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::P2;
        cells[3] = Cell::P2;
        cells[6] = Cell::P2;

        assert!(LineAnalyzer::has_won(&cells, Player::P2));
        assert_eq!(
            LineAnalyzer::completed_line(&cells, Player::P2),
            Some([0, 3, 6])
        );
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in WINNING_LINES {
            for player in [Player::P1, Player::P2] {
                let mut cells = [Cell::Empty; 9];
                for idx in line {
                    cells[idx] = player.to_cell();
                }
                assert_eq!(LineAnalyzer::completed_line(&cells, player), Some(line));
                assert!(!LineAnalyzer::has_won(&cells, player.opponent()));
            }
        }
    }
}
