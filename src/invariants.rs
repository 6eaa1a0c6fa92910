//! Structural invariants over a game.
//!
//! Invariants are logical properties that must hold between all public
//! calls. They are checked in debug builds after every applied move and
//! are testable independently.

use crate::board::{Board, Cell, Mark};
use crate::game::Game;

/// A logical property that must hold for a given state.
pub(crate) trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
pub(crate) trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation {
                description: I1::description(),
            });
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation {
                description: I2::description(),
            });
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation {
                description: I3::description(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The marks placed between two adjacent snapshots, in cell order.
fn placed_marks(before: &Board, after: &Board) -> Vec<Mark> {
    before
        .cells()
        .iter()
        .zip(after.cells().iter())
        .filter_map(|(b, a)| match (b, a) {
            (Cell::Empty, Cell::Occupied(mark)) => Some(*mark),
            _ => None,
        })
        .collect()
}

/// Count of cells that differ at all between two snapshots.
fn changed_cells(before: &Board, after: &Board) -> usize {
    before
        .cells()
        .iter()
        .zip(after.cells().iter())
        .filter(|(b, a)| b != a)
        .count()
}

/// Invariant: each snapshot adds exactly one mark to its predecessor.
///
/// Snapshot n differs from snapshot n-1 in exactly one cell, and that
/// cell goes from empty to occupied. Nothing is ever erased or
/// overwritten within a round.
pub(crate) struct StepShapeInvariant;

impl Invariant<Game> for StepShapeInvariant {
    fn holds(game: &Game) -> bool {
        game.timeline()
            .snapshots()
            .windows(2)
            .all(|pair| changed_cells(&pair[0], &pair[1]) == 1 && placed_marks(&pair[0], &pair[1]).len() == 1)
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}

/// Invariant: marks placed along the timeline strictly alternate.
pub(crate) struct AlternatingMarksInvariant;

impl Invariant<Game> for AlternatingMarksInvariant {
    fn holds(game: &Game) -> bool {
        let marks: Vec<Mark> = game
            .timeline()
            .snapshots()
            .windows(2)
            .flat_map(|pair| placed_marks(&pair[0], &pair[1]))
            .collect();

        marks.windows(2).all(|pair| pair[1] == pair[0].opponent())
    }

    fn description() -> &'static str {
        "Marks placed along the timeline strictly alternate"
    }
}

/// Invariant: the cursor always points at a recorded snapshot.
pub(crate) struct CursorBoundsInvariant;

impl Invariant<Game> for CursorBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.timeline().cursor() < game.timeline().snapshots().len()
    }

    fn description() -> &'static str {
        "Cursor always points at a recorded snapshot"
    }
}

/// All game invariants as a composable set.
pub(crate) type GameInvariants = (
    StepShapeInvariant,
    AlternatingMarksInvariant,
    CursorBoundsInvariant,
);

/// Panics with the collected violations if any invariant fails.
///
/// Called after each applied move in debug builds.
pub(crate) fn assert_valid(game: &Game) {
    if let Err(violations) = GameInvariants::check_all(game) {
        let descriptions: Vec<_> = violations.iter().map(|v| v.description).collect();
        panic!("invariant violation: {}", descriptions.join("; "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::new();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut game = Game::new();
        assert!(game.play_at(Position::Center));
        assert!(game.play_at(Position::TopLeft));
        assert!(game.play_at(Position::BottomRight));

        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariants_hold_across_time_travel() {
        let mut game = Game::new();
        game.play_at(Position::Center);
        game.play_at(Position::TopLeft);
        game.play_at(Position::TopRight);

        game.jump_to(1);
        game.play_at(Position::BottomLeft);

        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_step_shape_rejects_double_placement() {
        let mut corrupt = Board::new();
        corrupt.set(Position::TopLeft, Cell::Occupied(Mark::X));
        corrupt.set(Position::TopRight, Cell::Occupied(Mark::O));

        // Two marks appeared in a single step.
        assert_eq!(changed_cells(&Board::new(), &corrupt), 2);
        assert_eq!(placed_marks(&Board::new(), &corrupt).len(), 2);
    }
}
