//! Derived round status.

use serde::{Deserialize, Serialize};

use crate::board::Mark;
use crate::rules::Win;

/// Status of the round at the active snapshot.
///
/// Derived fresh on every read, never stored. Variants are listed in
/// display priority order: a win outranks a draw outranks the turn
/// prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// A mark completed a line.
    Won(Win),
    /// Board is full with no completed line.
    Draw,
    /// Round still open; this mark moves next.
    Turn(Mark),
}

impl Status {
    /// Returns the win, if the round has one.
    pub fn win(&self) -> Option<&Win> {
        match self {
            Status::Won(win) => Some(win),
            _ => None,
        }
    }

    /// Returns true if the round ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Status::Draw)
    }

    /// Returns true once the round has concluded either way.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::Turn(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Won(win) => write!(f, "{} wins!", win.mark()),
            Status::Draw => write!(f, "It's a draw"),
            Status::Turn(mark) => write!(f, "Turn: {mark}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_display_strings() {
        let win = Win::new(
            Mark::X,
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(Status::Won(win).to_string(), "X wins!");
        assert_eq!(Status::Draw.to_string(), "It's a draw");
        assert_eq!(Status::Turn(Mark::O).to_string(), "Turn: O");
    }

    #[test]
    fn test_predicates() {
        let win = Win::new(
            Mark::O,
            [Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert!(Status::Won(win).is_over());
        assert!(Status::Draw.is_over());
        assert!(Status::Draw.is_draw());
        assert!(!Status::Turn(Mark::X).is_over());
        assert!(Status::Won(win).win().is_some());
        assert!(Status::Turn(Mark::X).win().is_none());
    }
}
