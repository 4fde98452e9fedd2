//! Command-line interface for perfect_tictactoe.

use crate::notation::parse_board;
use clap::{Parser, Subcommand};
use perfect_tictactoe::{Board, Player};
use std::path::PathBuf;

/// Perfect-play tic-tac-toe via exhaustive minimax search
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Tic-tac-toe engine that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine on the console
    Play {
        /// Mark the human plays (X moves first)
        #[arg(long)]
        human: Option<Player>,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Starting board, e.g. "X../.O./..." (defaults to the empty board)
        #[arg(long, value_parser = parse_board)]
        from: Option<Board>,

        /// Print the game record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the minimax value of every move on a board
    Analyze {
        /// Board to analyze, e.g. "XX./OO./..."
        #[arg(value_parser = parse_board)]
        board: Board,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
