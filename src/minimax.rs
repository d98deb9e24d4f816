//! Exhaustive minimax search over Tic-Tac-Toe boards.
//!
//! X maximizes and O minimizes the terminal utility (+1 X wins, -1 O wins,
//! 0 draw). Every call explores the full remaining tree; there is no pruning
//! and no memo table.

use rand::{Rng, rngs::StdRng};
use serde::Serialize;
use tracing::debug;

use crate::tictactoe::{Action, Board, Player};

/// How to choose among equally valued best actions
#[derive(Debug, Clone, Default)]
pub enum TieBreak {
    /// First best action in row-major order
    #[default]
    First,
    /// Uniformly random best action
    Random(StdRng),
}

impl TieBreak {
    fn pick(&mut self, candidates: &[Action]) -> Option<Action> {
        match self {
            TieBreak::First => candidates.first().copied(),
            TieBreak::Random(rng) => {
                if candidates.is_empty() {
                    None
                } else {
                    Some(candidates[rng.random_range(0..candidates.len())])
                }
            }
        }
    }
}

/// Minimax value of playing `action` from a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionValue {
    pub action: Action,
    pub value: i32,
}

/// Summary of one root search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Chosen action, `None` on a terminal board
    pub best: Option<Action>,
    /// Game value of the root under optimal play
    pub value: i32,
    /// All root actions with their values, row-major
    pub evaluations: Vec<ActionValue>,
    /// Boards visited, root included
    pub nodes: u64,
}

#[derive(Default)]
struct Searcher {
    nodes: u64,
}

impl Searcher {
    fn max_value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        if let Some(utility) = board.utility() {
            return utility;
        }
        let mut value = i32::MIN;
        for (_, next) in board.successors() {
            value = value.max(self.min_value(&next));
        }
        value
    }

    fn min_value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        if let Some(utility) = board.utility() {
            return utility;
        }
        let mut value = i32::MAX;
        for (_, next) in board.successors() {
            value = value.min(self.max_value(&next));
        }
        value
    }

    fn evaluate(&mut self, board: &Board) -> Vec<ActionValue> {
        let maximizing = board.player() == Player::X;
        board
            .successors()
            .map(|(action, next)| ActionValue {
                action,
                value: if maximizing {
                    self.min_value(&next)
                } else {
                    self.max_value(&next)
                },
            })
            .collect()
    }
}

/// Value of a board when X (the maximizer) is to move
pub fn max_value(board: &Board) -> i32 {
    Searcher::default().max_value(board)
}

/// Value of a board when O (the minimizer) is to move
pub fn min_value(board: &Board) -> i32 {
    Searcher::default().min_value(board)
}


/// Full root search: value, per-action evaluations and the chosen action
pub fn search(board: &Board, tie_break: &mut TieBreak) -> SearchReport {
    let mut searcher = Searcher::default();
    searcher.nodes += 1;

    if let Some(utility) = board.utility() {
        return SearchReport {
            best: None,
            value: utility,
            evaluations: Vec::new(),
            nodes: searcher.nodes,
        };
    }

    let evaluations = searcher.evaluate(board);
    let values = evaluations.iter().map(|ev| ev.value);
    let value = match board.player() {
        Player::X => values.max(),
        Player::O => values.min(),
    }
    .unwrap_or_default();

    let candidates: Vec<Action> = evaluations
        .iter()
        .filter(|ev| ev.value == value)
        .map(|ev| ev.action)
        .collect();
    let best = tie_break.pick(&candidates);

    debug!(
        board = %board.encode(),
        player = %board.player(),
        value,
        nodes = searcher.nodes,
        tied = candidates.len(),
        best = ?best,
        "minimax search finished"
    );

    SearchReport {
        best,
        value,
        evaluations,
        nodes: searcher.nodes,
    }
}

/// Optimal action for the side to move, first best in row-major order.
///
/// Returns `None` on a terminal board.
pub fn minimax(board: &Board) -> Option<Action> {
    minimax_with(board, &mut TieBreak::First)
}

/// Optimal action for the side to move with an explicit tie-break policy
pub fn minimax_with(board: &Board, tie_break: &mut TieBreak) -> Option<Action> {
    search(board, tie_break).best
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_terminal_board_has_no_action() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert_eq!(minimax(&board), None);
        assert_eq!(max_value(&board), 1);
        assert_eq!(min_value(&board), 1);
        let report = search(&board, &mut TieBreak::First);
        assert!(report.evaluations.is_empty());
        assert_eq!(report.nodes, 1);
    }

    #[test]
    fn test_takes_immediate_win() {
        // XX.
        // OO.
        // ...
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // XX.
        // OO.
        // X..
        let board = Board::from_string("XX.OO.X..").unwrap();
        assert_eq!(board.player(), Player::O);
        assert_eq!(minimax(&board), Some(Action::new(1, 2)));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // XX.
        // .O.
        // ...
        let board = Board::from_string("XX..O....").unwrap();
        assert_eq!(board.player(), Player::O);
        assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_empty_board_value_is_draw() {
        let board = Board::initial_state();
        assert_eq!(max_value(&board), 0);
        let report = search(&board, &mut TieBreak::First);
        assert_eq!(report.evaluations.len(), 9);
        assert!(report.evaluations.iter().all(|ev| ev.value == 0));
    }

    #[test]
    fn test_search_report() {
        let board = Board::from_string("XX.OO....").unwrap();
        let report = search(&board, &mut TieBreak::First);
        assert_eq!(report.value, 1);
        assert_eq!(report.best, Some(Action::new(0, 2)));
        assert_eq!(report.evaluations.len(), 5);
        assert!(report.nodes > report.evaluations.len() as u64);
    }

    #[test]
    fn test_random_tie_break_picks_a_best_action() {
        let board = Board::initial_state();
        let mut tie_break = TieBreak::Random(StdRng::seed_from_u64(7));
        for _ in 0..3 {
            let action = minimax_with(&board, &mut tie_break).unwrap();
            assert!(board.actions().contains(&action));
        }
    }

    #[test]
    fn test_random_tie_break_respects_values() {
        // Only (0, 2) wins; random tie-breaking must not change that.
        let board = Board::from_string("XX.OO....").unwrap();
        let mut tie_break = TieBreak::Random(StdRng::seed_from_u64(1));
        assert_eq!(
            minimax_with(&board, &mut tie_break),
            Some(Action::new(0, 2))
        );
    }
}
