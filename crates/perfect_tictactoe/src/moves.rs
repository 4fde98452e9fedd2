//! Move coordinates on the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A cell coordinate `(row, col)`, each in `0..3`.
///
/// Only the checked constructors produce a `Move`, so every value
/// names a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// All nine moves in row-major order.
    ///
    /// This is the enumeration order used everywhere a tie must be broken.
    pub const ALL: [Move; 9] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 1 },
        Move { row: 0, col: 2 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 1, col: 2 },
        Move { row: 2, col: 0 },
        Move { row: 2, col: 1 },
        Move { row: 2, col: 2 },
    ];

    /// Creates a move, returning `None` if either coordinate is off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a move from a row-major cell index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major cell index (0-8).
    pub fn index(self) -> usize {
        self.row() * SIZE + self.col()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Move> for (u8, u8) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl TryFrom<(u8, u8)> for Move {
    type Error = String;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Move::new(row as usize, col as usize)
            .ok_or_else(|| format!("Move ({}, {}) is off the board", row, col))
    }
}
