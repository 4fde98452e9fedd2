//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the board methods and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
