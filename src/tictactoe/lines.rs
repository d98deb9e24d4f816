//! The eight three-in-a-row lines of the board

use super::{Cell, Player};

/// Cell indices of every line, row-major: rows, then columns, then diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Line queries over a raw cell array
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The player holding all three cells of `line`, if any
    pub fn line_owner(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Player> {
        let [a, b, c] = line.map(|idx| cells[idx]);
        if a != b || b != c {
            return None;
        }
        match a {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(cells, line) == Some(player))
    }

    /// Every line owned by `player`, in `WINNING_LINES` order
    pub fn completed_lines(cells: &[Cell; 9], player: Player) -> Vec<[usize; 3]> {
        WINNING_LINES
            .into_iter()
            .filter(|line| Self::line_owner(cells, line) == Some(player))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(marks: &[(usize, Cell)]) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for &(idx, cell) in marks {
            cells[idx] = cell;
        }
        cells
    }

    #[test]
    fn test_line_owner() {
        let cells = cells_from(&[(0, Cell::O), (3, Cell::O), (6, Cell::O), (1, Cell::X)]);
        assert_eq!(LineAnalyzer::line_owner(&cells, &[0, 3, 6]), Some(Player::O));
        assert_eq!(LineAnalyzer::line_owner(&cells, &[0, 1, 2]), None);
        assert_eq!(LineAnalyzer::line_owner(&cells, &[6, 7, 8]), None);
    }

    #[test]
    fn test_empty_line_has_no_owner() {
        let cells = [Cell::Empty; 9];
        assert!(WINNING_LINES
            .iter()
            .all(|line| LineAnalyzer::line_owner(&cells, line).is_none()));
    }

    #[test]
    fn test_has_won_diagonals() {
        let main = cells_from(&[(0, Cell::X), (4, Cell::X), (8, Cell::X)]);
        let anti = cells_from(&[(2, Cell::O), (4, Cell::O), (6, Cell::O)]);

        assert!(LineAnalyzer::has_won(&main, Player::X));
        assert!(!LineAnalyzer::has_won(&main, Player::O));
        assert!(LineAnalyzer::has_won(&anti, Player::O));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let cells = cells_from(&[(2, Cell::X), (4, Cell::X)]);
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
        assert!(LineAnalyzer::completed_lines(&cells, Player::X).is_empty());
    }

    #[test]
    fn test_completed_lines_sharing_a_corner() {
        // XXX
        // X..
        // X..
        let cells = cells_from(&[
            (0, Cell::X),
            (1, Cell::X),
            (2, Cell::X),
            (3, Cell::X),
            (6, Cell::X),
        ]);

        let lines = LineAnalyzer::completed_lines(&cells, Player::X);
        assert_eq!(lines, vec![[0, 1, 2], [0, 3, 6]]);
    }
}
