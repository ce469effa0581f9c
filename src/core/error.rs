//! Error type shared by every game.
//!
//! Bad user input is never an error: prompts re-ask until they get a
//! usable answer. The variants here are either broken invariants
//! (programmer errors that should fail fast) or the terminal going away.

use thiserror::Error;

/// Errors raised by the game engine and its console collaborators.
#[derive(Error, Debug)]
pub enum GameError {
    /// Tried to deal more cards than the deck holds.
    #[error("cannot deal {requested} card(s): only {remaining} left in the deck")]
    EmptyDeck { requested: usize, remaining: usize },

    /// Tried to mark a square that already carries a mark.
    #[error("square {0} is already taken")]
    OccupiedPosition(u8),

    /// A board position outside 1..=9.
    #[error("square {0} is not on the board (expected 1-9)")]
    PositionOutOfRange(u8),

    /// A match-loop event arrived in a state that cannot accept it.
    #[error("invalid match transition: {event} while {state}")]
    InvalidTransition { state: String, event: String },

    /// A message table is missing a key the game needs.
    #[error("message table has no entry for '{0}'")]
    MissingMessage(String),

    /// A message table file could not be parsed.
    #[error("malformed message table: {0}")]
    MessageFormat(#[from] serde_json::Error),

    /// Input ended while a prompt still needed an answer.
    #[error("input closed before an answer was given")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether this error just means the player walked away.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self, GameError::InputClosed)
    }
}
