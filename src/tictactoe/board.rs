//! Board representation and the core game rules

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, column) coordinate on the board.
///
/// Ordering is row-major, so a `BTreeSet<Action>` iterates top-left to
/// bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Build an action from a flat cell index (0-8)
    pub fn from_index(index: usize) -> Self {
        Action {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Flat cell index (0-8)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 board.
///
/// The side to move is never stored: it is derived from the mark counts, so
/// the cells are the single source of truth. `Board` is `Copy` and every move
/// returns a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
    pub(crate) empty: usize,
}

impl Board {
    /// The empty starting board
    pub fn initial_state() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board from rows without checking that it is reachable.
    ///
    /// Use [`Board::is_valid`] to check reachability, or [`Board::from_string`]
    /// for parsing with count validation.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            cells[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        Board { cells }
    }

    /// Parse a board from its 9-character text form.
    ///
    /// Whitespace is ignored, so `"XO. .X. ..O"` and `"XO..X...O"` are the same
    /// board. Empty cells may be written as `.`, `_` or `-`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are given
    /// - Any character is not a valid cell representation
    /// - The piece counts could not arise with X opening
    /// - The board could not arise in play, such as both sides holding a line
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let count = Self::count_pieces(&cells);
        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let board = Board { cells };
        if !board.is_valid() {
            return Err(crate::Error::UnreachableBoard {
                board: board.encode(),
            });
        }

        Ok(board)
    }

    pub(crate) fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The cell at an action's coordinates, `None` off the grid
    pub fn get(&self, action: Action) -> Option<Cell> {
        action.in_bounds().then(|| self.cells[action.index()])
    }

    /// The side to move: X when the counts are equal or X trails, otherwise O.
    pub fn player(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// All empty cells, in row-major order. Empty on a full board.
    pub fn actions(&self) -> BTreeSet<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Apply `action` for the side to move and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] for coordinates off the grid and
    /// [`crate::Error::InvalidAction`] when the cell is already occupied.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board, crate::Error> {
        if !action.in_bounds() {
            return Err(crate::Error::OutOfBounds {
                row: action.row,
                col: action.col,
            });
        }
        if self.cells[action.index()] != Cell::Empty {
            return Err(crate::Error::InvalidAction {
                row: action.row,
                col: action.col,
            });
        }
        Ok(self.place(action, self.player().to_cell()))
    }

    /// Every legal action paired with the board it produces.
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> {
        let board = *self;
        let mark = board.player().to_cell();
        board
            .actions()
            .into_iter()
            .map(move |action| (action, board.place(action, mark)))
    }

    fn place(&self, action: Action, mark: Cell) -> Board {
        let mut next = *self;
        next.cells[action.index()] = mark;
        next
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// The player with three in a row, if any. X is checked first.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// True when someone has won or no empty cells remain
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || Self::count_pieces(&self.cells).empty == 0
    }

    /// +1 if X won, -1 if O won, 0 for a draw.
    ///
    /// Only defined for terminal boards; returns `None` otherwise.
    pub fn utility(&self) -> Option<i32> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        })
    }

    /// Compact 9-character encoding, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_state()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
