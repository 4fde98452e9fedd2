//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. Every reachable board below the
//! root is visited: there is no pruning and no memoization, since the full
//! tic-tac-toe tree is small enough to walk directly.

use crate::{Board, Move, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of one top-level search.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Analysis {
    /// The move chosen for the side to move.
    best: Move,
    /// Minimax value of `best`, from X's perspective.
    value: i8,
    /// Every legal move with its minimax value, in row-major order.
    candidates: Vec<(Move, i8)>,
    /// Boards visited, root included.
    nodes: u64,
}

/// Walks the game tree, counting the boards it visits.
#[derive(Debug, Default)]
struct Searcher {
    nodes: u64,
}

impl Searcher {
    fn max_value(&mut self, board: &Board) -> i8 {
        self.nodes += 1;
        if board.is_terminal() {
            return board.utility();
        }
        board
            .successors()
            .map(|(_, child)| self.min_value(&child))
            .max()
            .unwrap_or_else(|| board.utility())
    }

    fn min_value(&mut self, board: &Board) -> i8 {
        self.nodes += 1;
        if board.is_terminal() {
            return board.utility();
        }
        board
            .successors()
            .map(|(_, child)| self.max_value(&child))
            .min()
            .unwrap_or_else(|| board.utility())
    }

    /// Values each child with the value function of the side that moves next.
    fn candidates(&mut self, board: &Board) -> Vec<(Move, i8)> {
        let to_move = board.current_player();
        board
            .successors()
            .map(|(mv, child)| {
                let value = match to_move {
                    Player::X => self.min_value(&child),
                    Player::O => self.max_value(&child),
                };
                (mv, value)
            })
            .collect()
    }
}

/// Picks the first candidate with the best value for `player`.
fn select(player: Player, candidates: &[(Move, i8)]) -> Option<(Move, i8)> {
    let mut best: Option<(Move, i8)> = None;
    for &(mv, value) in candidates {
        let improves = match best {
            None => true,
            Some((_, best_value)) => match player {
                Player::X => value > best_value,
                Player::O => value < best_value,
            },
        };
        if improves {
            best = Some((mv, value));
        }
    }
    best
}

/// Value of `board` when X is to move and both sides play perfectly.
pub fn max_value(board: &Board) -> i8 {
    Searcher::default().max_value(board)
}

/// Value of `board` when O is to move and both sides play perfectly.
pub fn min_value(board: &Board) -> i8 {
    Searcher::default().min_value(board)
}

/// Every legal move with its minimax value, in row-major order.
///
/// Empty on terminal boards.
#[instrument(level = "debug")]
pub fn evaluate_moves(board: &Board) -> Vec<(Move, i8)> {
    if board.is_terminal() {
        return Vec::new();
    }
    Searcher::default().candidates(board)
}

/// Searches the full tree below `board`.
///
/// Returns `None` if the board is terminal.
#[instrument(level = "debug", skip(board), fields(to_move = %board.current_player()))]
pub fn analyze(board: &Board) -> Option<Analysis> {
    if board.is_terminal() {
        debug!("Board is terminal, nothing to search");
        return None;
    }

    let mut searcher = Searcher { nodes: 1 };
    let candidates = searcher.candidates(board);
    let (best, value) = select(board.current_player(), &candidates)?;

    debug!(nodes = searcher.nodes, value, best = %best, "Search complete");
    Some(Analysis {
        best,
        value,
        candidates,
        nodes: searcher.nodes,
    })
}

/// Returns the optimal move for the player to move, or `None` on a terminal board.
///
/// Ties go to the first move in row-major order.
pub fn best_move(board: &Board) -> Option<Move> {
    analyze(board).map(|analysis| analysis.best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use crate::Cell::{Empty as E, Occupied};

    const X: Cell = Occupied(Player::X);
    const O: Cell = Occupied(Player::O);

    fn at(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_select_keeps_first_of_ties() {
        let candidates = [(at(0, 0), 0), (at(0, 1), 1), (at(0, 2), 1)];
        assert_eq!(select(Player::X, &candidates), Some((at(0, 1), 1)));
        assert_eq!(select(Player::O, &candidates), Some((at(0, 0), 0)));
        assert_eq!(select(Player::X, &[]), None);
    }

    #[test]
    fn test_values_of_terminal_boards_are_utility() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(max_value(&board), 1);
        assert_eq!(min_value(&board), 1);
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(best_move(&board), Some(at(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [X, E, E]]);
        assert_eq!(board.current_player(), Player::O);
        assert_eq!(best_move(&board), Some(at(1, 2)));
        assert_eq!(analyze(&board).unwrap().value(), &-1);
    }

    #[test]
    fn test_o_blocks_threat() {
        // X threatens the top row; O has nothing better than blocking.
        let board = Board::from_rows([[X, X, E], [E, O, E], [E, E, E]]);
        assert_eq!(best_move(&board), Some(at(0, 2)));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(best_move(&board), None);
        assert!(analyze(&board).is_none());
        assert!(evaluate_moves(&board).is_empty());
    }

    #[test]
    fn test_last_cell() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, E]]);
        let analysis = analyze(&board).unwrap();
        assert_eq!(analysis.best(), &at(2, 2));
        assert_eq!(analysis.value(), &0);
        assert_eq!(analysis.nodes(), &2);
    }

    #[test]
    fn test_candidates_cover_legal_moves() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let candidates = evaluate_moves(&board);
        let moves: Vec<Move> = candidates.iter().map(|(mv, _)| *mv).collect();
        assert_eq!(moves, board.legal_moves());
        assert!(candidates.iter().all(|(_, v)| (-1..=1).contains(v)));
    }
}
