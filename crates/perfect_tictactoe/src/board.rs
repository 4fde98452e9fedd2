//! The 3x3 board and its pure query and transition functions.

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::moves::SIZE;
use crate::{Cell, IllegalMoveError, Move, Outcome, Player, rules};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition returns a new board and
/// leaves the original untouched. Whose turn it is, the winner and the
/// outcome are all derived from the cells, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; SIZE * SIZE],
}

/// Returns the starting board: every cell empty, X to move.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SIZE * SIZE],
        }
    }

    /// Builds a board from three rows of cells.
    ///
    /// No balance check is made; callers that accept untrusted layouts
    /// should check [`BoardInvariants`] themselves.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let mut cells = [Cell::Empty; SIZE * SIZE];
        for (dst, src) in cells.iter_mut().zip(rows.iter().flatten()) {
            *dst = *src;
        }
        Self { cells }
    }

    /// Gets the cell at the given move's coordinates.
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for mv in Move::ALL {
            rows[mv.row()][mv.col()] = self.cell(mv);
        }
        rows
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Returns the player whose turn it is.
    ///
    /// X moves whenever the mark counts are equal, O otherwise.
    pub fn current_player(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns every empty cell, in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|mv| self.cell(*mv).is_empty())
            .collect()
    }

    /// Plays `mv` for the player to move and returns the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] if the target cell is occupied.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player()))]
    pub fn apply_move(&self, mv: Move) -> Result<Board, IllegalMoveError> {
        if let Cell::Occupied(occupant) = self.cell(mv) {
            warn!(%mv, %occupant, "Rejected move onto occupied square");
            return Err(IllegalMoveError::new(mv, occupant));
        }
        Ok(self.place(mv))
    }

    /// Plays `mv` without checking the target cell.
    ///
    /// Only called with moves drawn from [`Board::legal_moves`].
    pub(crate) fn place(&self, mv: Move) -> Board {
        let mut next = *self;
        next.cells[mv.index()] = Cell::Occupied(self.current_player());

        if cfg!(debug_assertions)
            && let Err(violations) = BoardInvariants::check_all(&next)
        {
            warn!(?violations, board = %next, "Board invariants violated");
        }

        next
    }

    /// Every legal move paired with the board it produces, in row-major order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        self.legal_moves()
            .into_iter()
            .map(move |mv| (mv, self.place(mv)))
    }

    /// Returns the player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if the game is over: a line is complete or no cell is empty.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || rules::is_full(self)
    }

    /// Scores the board from X's perspective: `1` if X won, `-1` if O won, `0` otherwise.
    ///
    /// Only meaningful on terminal boards.
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Derives the game status from the cells.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Player::X) => Outcome::XWins,
            Some(Player::O) => Outcome::OWins,
            None if rules::is_full(self) => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, "{}", row * SIZE + col + 1)?,
                    Cell::Occupied(player) => write!(f, "{}", player)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
