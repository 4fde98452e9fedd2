//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// Status of a board, derived from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// Game is ongoing.
    #[strum(to_string = "in progress")]
    InProgress,
    /// X completed a line.
    #[strum(to_string = "X wins")]
    XWins,
    /// O completed a line.
    #[strum(to_string = "O wins")]
    OWins,
    /// Board filled without a line.
    #[strum(to_string = "draw")]
    Draw,
}

impl Outcome {
    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Checks if the game has ended.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}
