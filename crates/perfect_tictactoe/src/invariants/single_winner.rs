//! Single winner invariant: the game stops at the first completed line.

use super::Invariant;
use crate::rules::win::{LINES, line_owner};
use crate::{Board, Player};
use strum::IntoEnumIterator;

/// Invariant: X and O never both own a completed line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let owners = Player::iter()
            .filter(|player| {
                LINES
                    .into_iter()
                    .any(|line| line_owner(board, line) == Some(*player))
            })
            .count();
        owners <= 1
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use crate::Cell::{Empty as E, Occupied};

    const X: Cell = Occupied(Player::X);
    const O: Cell = Occupied(Player::O);

    #[test]
    fn test_single_line_holds() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert!(SingleWinnerInvariant::holds(&board));
    }

    #[test]
    fn test_double_line_for_one_player_holds() {
        // X completes a row and a column with the same final mark.
        let board = Board::from_rows([[X, X, X], [O, X, O], [O, X, O]]);
        assert!(SingleWinnerInvariant::holds(&board));
    }

    #[test]
    fn test_both_players_violates() {
        let board = Board::from_rows([[X, X, X], [O, O, O], [E, E, E]]);
        assert!(!SingleWinnerInvariant::holds(&board));
    }
}
