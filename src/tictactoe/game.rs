//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while play continues
    pub fn of(board: &Board) -> Option<Self> {
        if !board.is_terminal() {
            return None;
        }
        Some(match board.winner() {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        })
    }
}

/// A game in progress with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::initial_state())
    }

    /// Resume play from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play an action for the side to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has an outcome, or the
    /// error from [`Board::result`] for an illegal action.
    pub fn play(&mut self, action: Action) -> Result<Board, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.result(action)?;

        self.moves.push(Move {
            action,
            player: current.player(),
        });
        self.outcome = GameOutcome::of(&next);

        Ok(next)
    }

    /// Replay the move history onto the initial board, calling `visit` with
    /// every board after the first.
    fn replay(&self, mut visit: impl FnMut(Board)) -> Result<Board, crate::Error> {
        let mut board = self.initial;
        for (index, mv) in self.moves.iter().enumerate() {
            let corrupt = |source| crate::Error::CorruptHistory {
                index,
                source: Box::new(source),
            };
            if board.player() != mv.player {
                return Err(corrupt(crate::Error::InvalidAction {
                    row: mv.action.row,
                    col: mv.action.col,
                }));
            }
            board = board.result(mv.action).map_err(corrupt)?;
            visit(board);
        }
        Ok(board)
    }

    /// Get the current board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CorruptHistory`] if a recorded move is illegal
    /// where it was played, or was played by the wrong side.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay(|_| {})
    }

    /// Every board from the initial one to the current one
    ///
    /// # Errors
    ///
    /// Same as [`Game::current_state`].
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(self.initial);
        self.replay(|board| states.push(board))?;
        Ok(states)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_history() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        game.play(Action::new(0, 0)).unwrap();

        assert_eq!(game.moves.len(), 2);
        assert_eq!(game.moves[0].player, Player::X);
        assert_eq!(game.moves[1].player, Player::O);
        assert_eq!(game.current_state().unwrap().encode(), "O...X....");
        assert_eq!(game.state_sequence().unwrap().len(), 3);
        assert!(!game.is_over());
    }

    #[test]
    fn test_play_rejects_occupied_cell() {
        let mut game = Game::new();
        game.play(Action::new(0, 0)).unwrap();
        let err = game.play(Action::new(0, 0)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidAction { .. }));
        assert_eq!(game.moves.len(), 1);
    }

    #[test]
    fn test_corrupt_history_is_reported() {
        let mut game = Game::new();
        game.play(Action::new(0, 0)).unwrap();
        game.moves.push(Move {
            action: Action::new(0, 0),
            player: Player::O,
        });

        let err = game.current_state().unwrap_err();
        assert!(matches!(
            err,
            crate::Error::CorruptHistory { index: 1, ref source }
                if matches!(**source, crate::Error::InvalidAction { row: 0, col: 0 })
        ));
        assert!(game.state_sequence().is_err());
        assert!(game.play(Action::new(1, 1)).is_err());
        assert_eq!(game.moves.len(), 2);
    }

    #[test]
    fn test_history_with_wrong_player_is_reported() {
        let mut game = Game::new();
        game.moves.push(Move {
            action: Action::new(1, 1),
            player: Player::O,
        });

        assert!(matches!(
            game.current_state(),
            Err(crate::Error::CorruptHistory { index: 0, .. })
        ));
    }

    #[test]
    fn test_outcome_and_game_over() {
        let mut game = Game::new();
        for action in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Action::new(action.0, action.1)).unwrap();
        }

        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert!(game.is_over());
        assert!(matches!(
            game.play(Action::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn test_from_terminal_board_is_over() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let game = Game::from_board(board);
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
    }
}
