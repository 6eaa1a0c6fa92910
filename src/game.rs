//! Turn/state engine for a single round.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{Board, Cell, Mark};
use crate::position::Position;
use crate::rules::{self, Win};
use crate::status::Status;
use crate::timeline::Timeline;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The round already has a winner; the board is frozen.
    #[display("Round is already won")]
    RoundOver,

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for PlayError {}

/// One round of tic-tac-toe: the snapshot timeline plus whose turn it is.
///
/// All writes go through the timeline's truncate-then-append, so time
/// travel and play stay consistent: playing from a mid-history cursor
/// discards the abandoned future before recording the new move.
///
/// Win, draw, and status are recomputed from the active snapshot on
/// every read rather than cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    timeline: Timeline,
    to_move: Mark,
}

impl Game {
    /// Creates a new round with X to move.
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            to_move: Mark::X,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Read access
    // ─────────────────────────────────────────────────────────────

    /// The board at the active snapshot.
    pub fn board(&self) -> &Board {
        self.timeline.current()
    }

    /// The snapshot timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Win at the active snapshot, if any.
    pub fn winner(&self) -> Option<Win> {
        rules::detect(self.board())
    }

    /// True if the active snapshot is a draw.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.board())
    }

    /// Derives the round status: win, then draw, then turn.
    pub fn status(&self) -> Status {
        if let Some(win) = self.winner() {
            Status::Won(win)
        } else if self.is_draw() {
            Status::Draw
        } else {
            Status::Turn(self.to_move)
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the next mark at `position`, reporting why a move was
    /// refused.
    ///
    /// On success: copies the active snapshot, marks the square,
    /// truncates any snapshots past the cursor, appends, and flips the
    /// turn.
    #[instrument(skip(self))]
    pub fn try_play(&mut self, position: Position) -> Result<(), PlayError> {
        if self.winner().is_some() {
            return Err(PlayError::RoundOver);
        }
        if !self.board().is_empty(position) {
            return Err(PlayError::SquareOccupied(position));
        }

        let mut next = self.board().clone();
        next.set(position, Cell::Occupied(self.to_move));
        self.timeline.record(next);
        self.to_move = self.to_move.opponent();

        #[cfg(debug_assertions)]
        crate::invariants::assert_valid(self);

        Ok(())
    }

    /// Places the next mark at `position`, silently ignoring invalid
    /// input.
    ///
    /// Returns whether a move was applied. Rejections are logged at
    /// debug level and otherwise discarded, the intended policy for a
    /// UI where a click on a dead square simply does nothing.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, position: Position) -> bool {
        match self.try_play(position) {
            Ok(()) => true,
            Err(reason) => {
                debug!(%position, %reason, "move ignored");
                false
            }
        }
    }

    /// Moves the cursor to snapshot `index` and recomputes the turn
    /// from its parity (X on even offsets).
    ///
    /// History contents are untouched; a subsequent play truncates the
    /// now-abandoned suffix.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the log (caller contract,
    /// see [`Timeline::jump`]).
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        self.timeline.jump(index);
        self.to_move = if index % 2 == 0 { Mark::X } else { Mark::O };
    }

    /// Steps the cursor back one move.
    ///
    /// No-op when already at the start or once the round is won: a
    /// finished round stays frozen. Returns whether the cursor moved.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        if self.timeline.cursor() == 0 || self.winner().is_some() {
            debug!(cursor = self.timeline.cursor(), "undo ignored");
            return false;
        }
        self.jump_to(self.timeline.cursor() - 1);
        true
    }

    /// Starts a fresh round: single empty snapshot, cursor 0.
    ///
    /// The new round opens with `starting_mark` if given; otherwise
    /// with whichever mark would have moved next at the pre-reset
    /// cursor (X on even offsets).
    #[instrument(skip(self))]
    pub fn reset(&mut self, starting_mark: Option<Mark>) {
        let fallback = if self.timeline.cursor() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        self.timeline = Timeline::new();
        self.to_move = starting_mark.unwrap_or(fallback);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
