//! Hot-seat play session: one game plus running scores.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Board, Mark};
use crate::game::Game;
use crate::position::Position;
use crate::score::ScoreBoard;
use crate::status::Status;

/// One entry of the history jump list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct HistoryEntry {
    /// Offset of the snapshot in the log.
    index: usize,
    /// Display label ("Start", then "Move #1", "Move #2", ...).
    label: String,
    /// Whether this entry is the active snapshot.
    current: bool,
}

/// A single-device play session.
///
/// Owns the round state and the score tallies; the two have independent
/// lifecycles (advancing a round resets the board but never the
/// scores). Every operation the presentation layer can trigger goes
/// through here, so in a concurrent setting a `Mutex<Session>` is the
/// one guard needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    game: Game,
    scores: ScoreBoard,
}

impl Session {
    /// Creates a session with a fresh round, X to move, zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new session");
        Self {
            game: Game::new(),
            scores: ScoreBoard::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Read model for the presentation layer
    // ─────────────────────────────────────────────────────────────

    /// The round state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The score tallies.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// The board at the active snapshot.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Derived round status.
    pub fn status(&self) -> Status {
        self.game.status()
    }

    /// Status line for display: "X wins!", "It's a draw", or "Turn: O".
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Entries for the history jump list, oldest first.
    ///
    /// Exactly one entry is flagged current.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        let cursor = self.game.timeline().cursor();
        (0..self.game.timeline().snapshots().len())
            .map(|index| {
                let label = if index == 0 {
                    "Start".to_string()
                } else {
                    format!("Move #{index}")
                };
                HistoryEntry::new(index, label, index == cursor)
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────────
    //  User actions
    // ─────────────────────────────────────────────────────────────

    /// Plays the next mark at `position`. Invalid input is ignored.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, position: Position) -> bool {
        self.game.play_at(position)
    }

    /// Jumps the round to snapshot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the history log.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        self.game.jump_to(index);
    }

    /// Steps back one move; ignored at the start or after a win.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        self.game.undo()
    }

    /// Clears the board without touching the scores.
    ///
    /// The next starter falls out of the cursor parity rule, matching
    /// an abandoned (unrecorded) round.
    #[instrument(skip(self))]
    pub fn clear_board(&mut self) {
        info!("Clearing board");
        self.game.reset(None);
    }

    /// Concludes the round and starts the next one.
    ///
    /// A win is tallied and the loser opens the next round; a draw is
    /// tallied and the parity rule picks the next starter. If the round
    /// is still open this does nothing. Returns whether a round was
    /// recorded.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) -> bool {
        match self.game.status() {
            Status::Won(win) => {
                let winner = *win.mark();
                self.scores.record_round(Some(winner), false);
                self.game.reset(Some(winner.opponent()));
                info!(%winner, "Round recorded, loser starts next");
                true
            }
            Status::Draw => {
                self.scores.record_round(None, true);
                self.game.reset(None);
                info!("Draw recorded");
                true
            }
            Status::Turn(_) => {
                debug!("next_round ignored, round still open");
                false
            }
        }
    }

    /// Full reset: zeroes the scores and starts a fresh round with X.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        info!("Resetting session");
        self.scores.reset_all();
        self.game.reset(Some(Mark::X));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
