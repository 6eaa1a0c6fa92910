//! Win detection logic.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::board::{Board, Cell, Mark};
use crate::position::Position;

/// A completed line of three.
///
/// Carries the three squares that form the line so a renderer can
/// highlight them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Win {
    /// The mark that completed the line.
    mark: Mark,
    /// The squares forming the line.
    line: [Position; 3],
}

/// The eight winning lines, in fixed order: rows, columns, diagonals.
///
/// Detection reports the first matching line in this order. Under
/// alternating play at most one line can complete, but the order is
/// the deterministic tie-break regardless.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks the board for a completed line.
///
/// Returns the winning mark and its line, or `None` if no line of
/// three identical non-empty marks exists.
#[instrument]
pub fn detect(board: &Board) -> Option<Win> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            if let Cell::Occupied(mark) = cell {
                return Some(Win::new(mark, [a, b, c]));
            }
        }
    }

    None
}
