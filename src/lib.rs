//! # parlor
//!
//! Four small terminal programs: Twenty-One, Tic-Tac-Toe, Rock Paper
//! Scissors Lizard Spock and a mortgage calculator.
//!
//! ## Design Principles
//!
//! 1. **Rounds Are Pure**: boards, decks, turns and the match state
//!    machine never do I/O. Only `Console` talks to the terminal.
//!
//! 2. **One Match Loop**: every round game plugs into `rules::run_session`
//!    through the `RoundGame` trait. Scoring and the grand-winner check
//!    live there, not in the games.
//!
//! 3. **Configuration Over Globals**: thresholds, winning lines, marks and
//!    message tables are values passed into constructors.
//!
//! ## Modules
//!
//! - `core`: actors, outcomes, RNG, match configuration, errors
//! - `console`: message tables, line prompting, screen clearing
//! - `rules`: scoreboard, match state machine, session loop
//! - `games`: the four programs

pub mod core;
pub mod console;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{Actor, ActorMap, GameError, GameRng, MatchConfig, Outcome};

pub use crate::console::{
    Console, IoPrompter, LinePrompter, Messages,
    NoopClearer, ScreenClearer, TerminalClearer, TerminalPrompter,
};

pub use crate::rules::{
    run_match, run_session, MatchSummary, RoundGame,
    MatchEnd, MatchMachine, MatchState, ScoreTally,
};
