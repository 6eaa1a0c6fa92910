//! Snapshot log with a movable cursor.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::board::Board;

/// Every board snapshot since the round started, plus a cursor
/// selecting the active one.
///
/// Snapshot 0 is always the empty board. The log is append-only except
/// for one operation: recording a move while the cursor sits before the
/// end truncates the abandoned suffix first. Cursor and snapshots are
/// only ever mutated together, so `cursor < snapshots.len()` holds
/// between all calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl Timeline {
    /// Creates a timeline holding a single empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// The board at the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// The cursor's offset into the log.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Moves the cursor to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the log. The presentation
    /// layer only ever offers recorded offsets, so an out-of-range jump
    /// is a caller bug, not user input.
    #[instrument(skip(self))]
    pub fn jump(&mut self, index: usize) {
        assert!(
            index < self.snapshots.len(),
            "jump target {index} past end of log ({})",
            self.snapshots.len()
        );
        self.cursor = index;
    }

    /// Truncates everything after the cursor, appends `board`, and
    /// moves the cursor onto it.
    ///
    /// Snapshots past the cursor belong to an abandoned branch and are
    /// discarded irretrievably.
    #[instrument(skip(self, board))]
    pub fn record(&mut self, board: Board) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
