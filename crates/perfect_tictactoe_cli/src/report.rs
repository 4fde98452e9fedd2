//! Plain-text rendering of search results and game records.

use perfect_tictactoe::{Analysis, GameRecord};
use std::io::{self, Write};

/// Writes each candidate move with its value, marking the chosen move.
pub fn write_candidates<W: Write>(output: &mut W, analysis: &Analysis) -> io::Result<()> {
    for (mv, value) in analysis.candidates() {
        let marker = if mv == analysis.best() { "*" } else { " " };
        writeln!(output, "{} {} -> {:+}", marker, mv, value)?;
    }
    Ok(())
}

/// Writes a full analysis: candidates, chosen move and search size.
pub fn write_analysis<W: Write>(output: &mut W, analysis: &Analysis) -> io::Result<()> {
    write_candidates(output, analysis)?;
    writeln!(
        output,
        "Best move: {} (value {:+}, {} nodes searched)",
        analysis.best(),
        analysis.value(),
        analysis.nodes()
    )
}

/// Writes every board of a game record followed by the result.
pub fn write_record<W: Write>(output: &mut W, record: &GameRecord) -> io::Result<()> {
    let boards = record.boards();
    writeln!(output, "{}", boards[0])?;
    for (ply, (mv, board)) in record.moves().iter().zip(&boards[1..]).enumerate() {
        writeln!(output, "{}. {} plays {}", ply + 1, boards[ply].current_player(), mv)?;
        writeln!(output, "{}", board)?;
    }
    writeln!(output, "Result: {}", record.outcome())
}
