//! Draw detection logic.

use tracing::instrument;

use super::win;
use crate::board::Board;

/// Checks whether the board is a draw.
///
/// A draw is a full board with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && win::detect(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Mark};
    use crate::position::Position;

    #[test]
    fn test_empty_board_is_not_a_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_is_not_a_draw() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Mark::X));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        // X O X / O X O / O X O - full, no three-in-a-row
        let mut board = Board::new();
        for (pos, mark) in [
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::X),
            (Position::MiddleRight, Mark::O),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::X),
            (Position::BottomRight, Mark::O),
        ] {
            board.set(pos, Cell::Occupied(mark));
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_a_draw() {
        let mut board = Board::new();
        for (pos, mark) in [
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::O),
            (Position::MiddleRight, Mark::X),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::X),
            (Position::BottomRight, Mark::O),
        ] {
            board.set(pos, Cell::Occupied(mark));
        }
        assert!(!is_draw(&board));
    }
}
