//! Score tallying across rounds.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::Mark;

/// Win and draw counters for a session.
///
/// Lives independently of the board: resetting or replaying a round
/// leaves the tallies alone. Only [`ScoreBoard::reset_all`] zeroes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScoreBoard {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Rounds ended in a draw.
    draws: u32,
}

impl ScoreBoard {
    /// Creates a zeroed score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a concluded round.
    ///
    /// Increments the winner's tally when a winner is given, else the
    /// draw tally when `is_draw` is set. Calling this before the round
    /// concluded is a caller error and changes nothing.
    #[instrument(skip(self))]
    pub fn record_round(&mut self, winner: Option<Mark>, is_draw: bool) {
        match winner {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None if is_draw => self.draws += 1,
            None => debug!("record_round called on an unfinished round"),
        }
    }

    /// Zeroes all three counters.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_zeroed() {
        let scores = ScoreBoard::new();
        assert_eq!(*scores.x_wins(), 0);
        assert_eq!(*scores.o_wins(), 0);
        assert_eq!(*scores.draws(), 0);
    }

    #[test]
    fn test_record_wins_and_draws() {
        let mut scores = ScoreBoard::new();
        scores.record_round(Some(Mark::X), false);
        scores.record_round(Some(Mark::X), false);
        scores.record_round(Some(Mark::O), false);
        scores.record_round(None, true);

        assert_eq!(*scores.x_wins(), 2);
        assert_eq!(*scores.o_wins(), 1);
        assert_eq!(*scores.draws(), 1);
    }

    #[test]
    fn test_unfinished_round_changes_nothing() {
        let mut scores = ScoreBoard::new();
        scores.record_round(None, false);
        assert_eq!(scores, ScoreBoard::new());
    }

    #[test]
    fn test_reset_all_zeroes_everything() {
        let mut scores = ScoreBoard::new();
        scores.record_round(Some(Mark::O), false);
        scores.record_round(None, true);
        scores.reset_all();
        assert_eq!(scores, ScoreBoard::new());
    }
}
