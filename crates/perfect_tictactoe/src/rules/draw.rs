//! Full-board detection for tic-tac-toe.

use crate::{Board, Cell};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
