//! Win detection logic for tic-tac-toe.

use crate::{Board, Move, Player};

const fn mv(row: u8, col: u8) -> Move {
    Move::ALL[(row * 3 + col) as usize]
}

/// Every line of three, in scan order: rows, then columns, then diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [mv(0, 0), mv(0, 1), mv(0, 2)],
    [mv(1, 0), mv(1, 1), mv(1, 2)],
    [mv(2, 0), mv(2, 1), mv(2, 2)],
    // Columns
    [mv(0, 0), mv(1, 0), mv(2, 0)],
    [mv(0, 1), mv(1, 1), mv(2, 1)],
    [mv(0, 2), mv(1, 2), mv(2, 2)],
    // Diagonals
    [mv(0, 0), mv(1, 1), mv(2, 2)],
    [mv(2, 0), mv(1, 1), mv(0, 2)],
];

/// Returns the owner of `line` if all three cells hold the same mark.
pub fn line_owner(board: &Board, [a, b, c]: [Move; 3]) -> Option<Player> {
    let owner = board.cell(a).player()?;
    (board.cell(b).player() == Some(owner) && board.cell(c).player() == Some(owner))
        .then_some(owner)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (in [`LINES`] order) held
/// entirely by one player, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}
