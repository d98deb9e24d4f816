//! Board reachability checks

use std::collections::HashSet;

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check whether the board can arise from the empty board through legal
    /// alternating moves with X opening.
    pub fn is_valid(&self) -> bool {
        let count = Self::count_pieces(self.cells());

        // X opens, so X is level with O or one ahead.
        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner moved last: X wins leave X one ahead, O wins leave counts level.
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        // Play stops at the first win, so several lines must share the final mark.
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(self.cells(), player);
        if lines.len() < 2 {
            return true;
        }
        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }

    /// Every board reachable from the empty board through legal alternating
    /// moves, stopping at terminal boards. The empty board comes first.
    pub fn reachable_states() -> Vec<Board> {
        let mut seen = HashSet::new();
        let mut stack = vec![Board::initial_state()];
        let mut boards = Vec::new();

        while let Some(board) = stack.pop() {
            if !seen.insert(board) {
                continue;
            }
            boards.push(board);
            if !board.is_terminal() {
                stack.extend(board.successors().map(|(_, next)| next));
            }
        }

        boards
    }
}
