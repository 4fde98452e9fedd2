//! Entry points for each subcommand.

use crate::cli::Command;
use crate::config::PlayConfig;
use crate::console::run_match;
use crate::notation::format_board;
use crate::report::{write_analysis, write_record};
use anyhow::Result;
use perfect_tictactoe::{Board, analyze, initial_state, self_play};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Dispatches a parsed command.
pub fn run<R: BufRead, W: Write>(
    command: Command,
    config: PlayConfig,
    input: R,
    output: &mut W,
) -> Result<()> {
    match command {
        Command::Play { human } => {
            let config = config.with_human(human);
            run_match(input, output, &config)?;
            Ok(())
        }
        Command::SelfPlay { from, json } => {
            run_self_play(from.unwrap_or_else(initial_state), json, output)
        }
        Command::Analyze { board, json } => run_analyze(&board, json, output),
    }
}

/// Plays the engine against itself from `start` and prints the game.
#[instrument(skip(start, output), fields(start = %format_board(&start)))]
pub fn run_self_play<W: Write>(start: Board, json: bool, output: &mut W) -> Result<()> {
    let record = self_play(start);
    info!(plies = record.moves().len(), outcome = %record.outcome(), "Self-play complete");

    if json {
        serde_json::to_writer_pretty(&mut *output, &record)?;
        writeln!(output)?;
    } else {
        write_record(output, &record)?;
    }
    Ok(())
}

/// Prints the value of every legal move on `board`.
#[instrument(skip(board, output), fields(board = %format_board(board)))]
pub fn run_analyze<W: Write>(board: &Board, json: bool, output: &mut W) -> Result<()> {
    let analysis = analyze(board);

    match (analysis, json) {
        (Some(analysis), true) => {
            serde_json::to_writer_pretty(&mut *output, &analysis)?;
            writeln!(output)?;
        }
        (Some(analysis), false) => {
            writeln!(output, "{}\n{} to move", board, board.current_player())?;
            write_analysis(output, &analysis)?;
        }
        (None, true) => {
            serde_json::to_writer_pretty(&mut *output, &board.outcome())?;
            writeln!(output)?;
        }
        (None, false) => {
            writeln!(output, "{}\nGame over: {}", board, board.outcome())?;
        }
    }
    Ok(())
}
