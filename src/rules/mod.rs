//! Match rules shared by every round-based game.
//!
//! - `scoreboard`: wins/losses/ties and the grand-winner check
//! - `machine`: the match state machine, free of I/O
//! - `engine`: the `RoundGame` trait and the loops that drive it
//!
//! Games implement `RoundGame`; they never touch the score directly.

pub mod engine;
pub mod machine;
pub mod scoreboard;

pub use engine::{run_match, run_session, MatchSummary, RoundGame, SESSION_MESSAGES};
pub use machine::{MatchEnd, MatchMachine, MatchState};
pub use scoreboard::ScoreTally;
