//! Error types for the board model.

use crate::{Move, Player};
use derive_more::{Display, Error};
use tracing::instrument;

/// A move targeted a cell that is already occupied.
///
/// This is the only failure the board model can produce. Search never
/// triggers it because it only plays moves taken from the legal move list.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Illegal move {}: square already occupied by {} at {}:{}", mv, occupant, file, line)]
pub struct IllegalMoveError {
    /// The rejected move.
    pub mv: Move,
    /// The mark already in the target cell.
    pub occupant: Player,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl IllegalMoveError {
    /// Creates a new illegal move error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(mv: Move, occupant: Player) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            mv,
            occupant,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
