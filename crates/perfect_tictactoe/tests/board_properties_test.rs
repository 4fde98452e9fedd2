//! Properties of the board model over every reachable position.

use perfect_tictactoe::invariants::{BoardInvariants, InvariantSet};
use perfect_tictactoe::{Board, Cell, Move, Outcome, Player, initial_state};
use std::collections::HashSet;

/// Every distinct board reachable from the initial state by legal play.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if !board.is_terminal() {
            stack.extend(board.successors().map(|(_, child)| child));
        }
    }
    boards
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of distinct legal positions, empty board included.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_invariants_hold_on_reachable_boards() {
    for board in reachable_boards() {
        assert!(
            BoardInvariants::check_all(&board).is_ok(),
            "Invariant violated on:\n{}",
            board
        );
    }
}

#[test]
fn test_current_player_alternates() {
    let mut board = initial_state();
    let mut expected = Player::X;
    for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        assert_eq!(board.current_player(), expected);
        board = board.apply_move(Move::from_index(index).unwrap()).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn test_current_player_matches_ply_parity() {
    for board in reachable_boards() {
        let ply = board.cells().iter().filter(|c| !c.is_empty()).count();
        let expected = if ply % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(board.current_player(), expected);
    }
}

#[test]
fn test_played_cell_never_reoffered() {
    for board in reachable_boards().into_iter().filter(|b| !b.is_terminal()) {
        for mv in board.legal_moves() {
            let next = board.apply_move(mv).unwrap();
            assert!(!next.legal_moves().contains(&mv));
            assert_eq!(next.legal_moves().len(), board.legal_moves().len() - 1);

            let err = next.apply_move(mv).unwrap_err();
            assert_eq!(err.mv, mv);
            assert_eq!(err.occupant, board.current_player());
        }
    }
}

#[test]
fn test_terminal_iff_winner_or_full() {
    for board in reachable_boards() {
        assert_eq!(
            board.is_terminal(),
            board.winner().is_some() || board.legal_moves().is_empty()
        );
    }
}

#[test]
fn test_outcome_agrees_with_queries() {
    for board in reachable_boards() {
        let outcome = board.outcome();
        assert_eq!(outcome.is_over(), board.is_terminal());
        assert_eq!(outcome.winner(), board.winner());
        if board.is_terminal() {
            let expected = match outcome {
                Outcome::XWins => 1,
                Outcome::OWins => -1,
                _ => 0,
            };
            assert_eq!(board.utility(), expected);
        }
    }
}

#[test]
fn test_nearly_full_board_without_line() {
    let x = Cell::Occupied(Player::X);
    let o = Cell::Occupied(Player::O);
    let board = Board::from_rows([[x, o, x], [x, o, o], [o, x, Cell::Empty]]);

    assert_eq!(board.winner(), None);
    assert_eq!(board.utility(), 0);
    // One cell remains, so the game is still on.
    assert!(!board.is_terminal());
    assert_eq!(board.legal_moves(), vec![Move::new(2, 2).unwrap()]);

    let full = board.apply_move(Move::new(2, 2).unwrap()).unwrap();
    assert!(full.is_terminal());
    assert_eq!(full.winner(), None);
    assert_eq!(full.utility(), 0);
    assert_eq!(full.outcome(), Outcome::Draw);
}

#[test]
fn test_board_serde_round_trip() {
    let board = initial_state()
        .apply_move(Move::new(1, 1).unwrap())
        .unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
