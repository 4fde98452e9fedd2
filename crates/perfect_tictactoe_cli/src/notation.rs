//! Text notation for boards and moves.
//!
//! A board is nine cells in row-major order: `X` or `O` for marks and
//! `.`, `_` or a digit for an empty cell. Whitespace, `|`, `/`, `-` and
//! `+` are separators and ignored, so both `"XX./OO./..."` and the grid
//! printed by `Board`'s `Display` read back.

use perfect_tictactoe::invariants::{BoardInvariants, InvariantSet};
use perfect_tictactoe::{Board, Cell, Move, Player, SIZE};
use tracing::instrument;

/// Error reading a board or move from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// The text does not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character that is neither a mark, an empty cell nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// The cells cannot arise from legal play.
    #[display("Unreachable board: {}", _0)]
    Unreachable(String),

    /// Move text is neither a cell number nor a coordinate pair.
    #[display("Cannot read move {:?}: enter a cell number 1-9 or row,col", _0)]
    BadMove(String),
}

impl std::error::Error for NotationError {}

/// Parses a board, rejecting layouts that break the board invariants.
#[instrument]
pub fn parse_board(text: &str) -> Result<Board, NotationError> {
    let mut cells = Vec::with_capacity(SIZE * SIZE);
    for ch in text.chars() {
        let cell = match ch {
            c if c.is_whitespace() || matches!(c, '|' | '/' | '-' | '+') => continue,
            'x' | 'X' => Cell::Occupied(Player::X),
            'o' | 'O' => Cell::Occupied(Player::O),
            '.' | '_' | '1'..='9' => Cell::Empty,
            other => return Err(NotationError::UnexpectedChar(other)),
        };
        cells.push(cell);
    }

    if cells.len() != SIZE * SIZE {
        return Err(NotationError::WrongLength(cells.len()));
    }

    let mut rows = [[Cell::Empty; SIZE]; SIZE];
    for (i, cell) in cells.into_iter().enumerate() {
        rows[i / SIZE][i % SIZE] = cell;
    }
    let board = Board::from_rows(rows);

    BoardInvariants::check_all(&board).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        NotationError::Unreachable(descriptions)
    })?;

    Ok(board)
}

/// Renders a board in the compact one-line form `XX./OO./...`.
pub fn format_board(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::X) => 'X',
                    Cell::Occupied(Player::O) => 'O',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Parses a move as a 1-based cell number (`1`-`9`) or a 0-based `row,col` pair.
#[instrument]
pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let bad = || NotationError::BadMove(text.trim().to_string());
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => {
            let cell: usize = cell.parse().map_err(|_| bad())?;
            cell.checked_sub(1).and_then(Move::from_index).ok_or_else(bad)
        }
        [row, col] => {
            let row: usize = row.parse().map_err(|_| bad())?;
            let col: usize = col.parse().map_err(|_| bad())?;
            Move::new(row, col).ok_or_else(bad)
        }
        _ => Err(bad()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_compact() {
        let board = parse_board("XX./OO./...").unwrap();
        assert_eq!(board.current_player(), Player::X);
        assert_eq!(board.legal_moves().len(), 5);
        assert_eq!(board.cell(Move::new(1, 0).unwrap()), Cell::Occupied(Player::O));
    }

    #[test]
    fn test_parse_board_rendered_grid() {
        let board = parse_board("XX./OO./...").unwrap();
        assert_eq!(parse_board(&board.to_string()), Ok(board));
    }

    #[test]
    fn test_parse_board_lowercase_and_spaces() {
        assert_eq!(parse_board("x o _ _ _ _ _ _ _").unwrap().count(Player::O), 1);
    }

    #[test]
    fn test_parse_board_wrong_length() {
        assert_eq!(parse_board("XO."), Err(NotationError::WrongLength(3)));
    }

    #[test]
    fn test_parse_board_bad_char() {
        assert_eq!(
            parse_board("XO?......"),
            Err(NotationError::UnexpectedChar('?'))
        );
    }

    #[test]
    fn test_parse_board_unbalanced() {
        assert!(matches!(
            parse_board("OO......."),
            Err(NotationError::Unreachable(_))
        ));
    }

    #[test]
    fn test_format_board_round_trip() {
        let board = parse_board("XO./.X./..O").unwrap();
        assert_eq!(format_board(&board), "XO./.X./..O");
    }

    #[test]
    fn test_parse_move_cell_number() {
        assert_eq!(parse_move("1"), Ok(Move::new(0, 0).unwrap()));
        assert_eq!(parse_move(" 9\n"), Ok(Move::new(2, 2).unwrap()));
        assert!(parse_move("0").is_err());
        assert!(parse_move("10").is_err());
    }

    #[test]
    fn test_parse_move_row_col() {
        assert_eq!(parse_move("1,2"), Ok(Move::new(1, 2).unwrap()));
        assert_eq!(parse_move("2 0"), Ok(Move::new(2, 0).unwrap()));
        assert!(parse_move("3,0").is_err());
    }

    #[test]
    fn test_parse_move_garbage() {
        assert_eq!(
            parse_move("center"),
            Err(NotationError::BadMove("center".to_string()))
        );
        assert!(parse_move("").is_err());
        assert!(parse_move("1,2,3").is_err());
    }
}
