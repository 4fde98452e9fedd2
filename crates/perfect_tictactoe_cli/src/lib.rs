//! Console driver for perfect-play tic-tac-toe.
//!
//! Wraps the `perfect_tictactoe` engine in a small command-line tool:
//!
//! - **play**: human versus engine over stdin/stdout
//! - **self-play**: the engine against itself
//! - **analyze**: the minimax value of every move on a given board
//!
//! The driver holds no game logic of its own; it parses text, loads
//! configuration and prints what the engine returns.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod console;
mod notation;
mod report;

pub use cli::{Cli, Command};
pub use commands::{run, run_analyze, run_self_play};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, PlayConfig};
pub use console::run_match;
pub use notation::{NotationError, format_board, parse_board, parse_move};
pub use report::{write_analysis, write_candidates, write_record};
