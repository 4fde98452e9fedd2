//! Engine-versus-engine play.

use crate::{Board, Move, Outcome, search};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A finished game, move by move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board the game started from.
    start: Board,
    /// Moves played, in order.
    moves: Vec<Move>,
    /// Terminal board.
    final_board: Board,
    /// Result of the final board.
    outcome: Outcome,
}

impl GameRecord {
    /// Boards after each move, starting with the initial board.
    pub fn boards(&self) -> Vec<Board> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.start;
        boards.push(board);
        for &mv in &self.moves {
            board = board.place(mv);
            boards.push(board);
        }
        boards
    }
}

/// Plays `best_move` for both sides from `start` until the game ends.
#[instrument(level = "debug", skip(start))]
pub fn self_play(start: Board) -> GameRecord {
    let mut board = start;
    let mut moves = Vec::new();

    while let Some(mv) = search::best_move(&board) {
        debug!(ply = moves.len() + 1, player = %board.current_player(), %mv, "Engine move");
        board = board.place(mv);
        moves.push(mv);
    }

    let outcome = board.outcome();
    info!(plies = moves.len(), %outcome, "Self-play finished");
    GameRecord {
        start,
        moves,
        final_board: board,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell::{Empty as E, Occupied};
    use crate::{Cell, Player};

    const X: Cell = Occupied(Player::X);
    const O: Cell = Occupied(Player::O);

    #[test]
    fn test_terminal_start_plays_nothing() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let record = self_play(board);
        assert!(record.moves().is_empty());
        assert_eq!(record.final_board(), &board);
        assert_eq!(record.outcome(), &Outcome::XWins);
    }

    #[test]
    fn test_finishes_winning_position() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let record = self_play(board);
        assert_eq!(record.moves(), &vec![Move::new(0, 2).unwrap()]);
        assert_eq!(record.outcome(), &Outcome::XWins);
    }

    #[test]
    fn test_boards_replay_moves() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [E, E, E]]);
        let record = self_play(board);
        let boards = record.boards();
        assert_eq!(boards.len(), record.moves().len() + 1);
        assert_eq!(boards.first(), Some(&board));
        assert_eq!(boards.last(), Some(record.final_board()));
    }
}
