//! Noughts - tic-tac-toe game engine with move history and score tallying
//!
//! The crate is the game-state core of a single-device tic-tac-toe app:
//! board representation, win/draw detection, a snapshot history with
//! time travel, and score accumulation across rounds. Rendering is the
//! caller's job; [`Session`] exposes everything a view needs to read
//! (board, status text, jump list, tallies) and the handful of actions
//! a user can trigger.
//!
//! # Example
//!
//! ```
//! use noughts::{Mark, Position, Session};
//!
//! let mut session = Session::new();
//! session.play_at(Position::Center);
//! session.play_at(Position::TopLeft);
//! assert_eq!(session.status_text(), "Turn: X");
//!
//! // Time travel: step back, then branch off.
//! session.undo();
//! session.play_at(Position::BottomRight);
//! assert_eq!(session.game().to_move(), Mark::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod game;
mod invariants;
mod position;
mod score;
mod session;
mod status;
mod timeline;

pub mod rules;

// Crate-level exports - Domain types
pub use board::{Board, Cell, Mark};
pub use position::Position;

// Crate-level exports - Rules
pub use rules::Win;

// Crate-level exports - Round state
pub use game::{Game, PlayError};
pub use status::Status;
pub use timeline::Timeline;

// Crate-level exports - Session
pub use score::ScoreBoard;
pub use session::{HistoryEntry, Session};
