//! Mark balance invariant: X moves first and play alternates.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
