//! Human-versus-engine play over a line-oriented console.

use crate::config::PlayConfig;
use crate::notation::parse_move;
use crate::report::write_candidates;
use anyhow::{Context, Result, bail};
use perfect_tictactoe::{Outcome, analyze, initial_state};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Plays one game, reading the human's moves from `input`.
///
/// Bad input and occupied squares re-prompt. Returns the final outcome, or an
/// error if `input` ends before the game does.
#[instrument(skip_all, fields(human = %config.human()))]
pub fn run_match<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    config: &PlayConfig,
) -> Result<Outcome> {
    let human = *config.human();
    let mut board = initial_state();
    let mut lines = input.lines();

    writeln!(output, "You play {}. Enter a cell number 1-9 or row,col.", human)?;

    while !board.is_terminal() {
        let to_move = board.current_player();

        if to_move == human {
            write!(output, "\n{}\n{} to move: ", board, to_move)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                bail!("Input ended before the game finished");
            };
            let line = line.context("Failed to read move")?;

            let mv = match parse_move(&line) {
                Ok(mv) => mv,
                Err(e) => {
                    debug!(error = %e, "Unreadable move");
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match board.apply_move(mv) {
                Ok(next) => board = next,
                Err(e) => {
                    warn!(error = %e, "Human picked an occupied square");
                    writeln!(output, "Square {} is already taken by {}.", e.mv, e.occupant)?;
                }
            }
        } else {
            let analysis = analyze(&board).context("Engine asked to move on a finished board")?;
            if *config.show_analysis() {
                write_candidates(output, &analysis)?;
            }
            writeln!(output, "Engine ({}) plays {}.", to_move, analysis.best())?;
            board = board.apply_move(*analysis.best())?;
        }
    }

    let outcome = board.outcome();
    info!(%outcome, "Game over");
    writeln!(output, "\n{}\nResult: {}", board, outcome)?;
    Ok(outcome)
}
