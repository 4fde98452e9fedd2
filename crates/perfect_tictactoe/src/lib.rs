//! Perfect-play tic-tac-toe.
//!
//! A value-semantic 3x3 board model and an exhaustive minimax search over
//! it. Every query on a [`Board`] (turn, legal moves, winner, terminal
//! status, utility) is derived from its cells alone, and every transition
//! returns a fresh board.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Move, best_move, initial_state};
//!
//! let board = initial_state();
//! let mv = best_move(&board).expect("empty board has moves");
//! assert_eq!(mv, Move::new(0, 0).unwrap());
//!
//! let board = board.apply_move(mv)?;
//! assert!(board.apply_move(mv).is_err());
//! # Ok::<(), perfect_tictactoe::IllegalMoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod moves;
mod search;
mod selfplay;
mod types;

pub mod invariants;
pub mod rules;

pub use board::{Board, initial_state};
pub use error::IllegalMoveError;
pub use moves::{Move, SIZE};
pub use search::{Analysis, analyze, best_move, evaluate_moves, max_value, min_value};
pub use selfplay::{GameRecord, self_play};
pub use types::{Cell, Outcome, Player};
