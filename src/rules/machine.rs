//! Match state machine.
//!
//! ```text
//!                 start_round
//!  AwaitingRound ─────────────▶ RoundInProgress
//!       ▲                          │ finish_round
//!       │                          ├── grand winner ──────────▶ MatchOver(GrandWinner)
//!       │ answer_continue(true)    ├── ask_to_continue ──▶ AwaitingContinue
//!       │                          └── otherwise ──▶ AwaitingRound
//!       └──────── AwaitingContinue ── answer_continue(false) ─▶ MatchOver(Declined)
//! ```
//!
//! The machine does no I/O; `engine::run_match` drives it.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::scoreboard::ScoreTally;
use crate::core::{Actor, GameError, MatchConfig, Outcome};

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEnd {
    /// One side reached the grand-winner threshold.
    GrandWinner(Actor),
    /// The player chose not to continue.
    Declined,
}

/// Where a match currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    AwaitingRound,
    RoundInProgress,
    AwaitingContinue,
    MatchOver(MatchEnd),
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchState::AwaitingRound => write!(f, "awaiting round"),
            MatchState::RoundInProgress => write!(f, "round in progress"),
            MatchState::AwaitingContinue => write!(f, "awaiting continue"),
            MatchState::MatchOver(_) => write!(f, "match over"),
        }
    }
}

/// Score and state for one match.
#[derive(Clone, Debug)]
pub struct MatchMachine {
    config: MatchConfig,
    tally: ScoreTally,
    state: MatchState,
}

impl MatchMachine {
    /// A new match with an empty tally.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            tally: ScoreTally::new(),
            state: MatchState::AwaitingRound,
        }
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    #[must_use]
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.state, MatchState::MatchOver(_))
    }

    /// Begin the next round.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        match self.state {
            MatchState::AwaitingRound => {
                self.transition(MatchState::RoundInProgress);
                Ok(())
            }
            _ => Err(self.reject("start round")),
        }
    }

    /// Record a finished round and decide what comes next.
    pub fn finish_round(&mut self, outcome: Outcome) -> Result<MatchState, GameError> {
        if self.state != MatchState::RoundInProgress {
            return Err(self.reject("finish round"));
        }

        self.tally.record(outcome);

        let next = match self.tally.grand_winner(self.config.grand_winner) {
            Some(actor) => MatchState::MatchOver(MatchEnd::GrandWinner(actor)),
            None if self.config.ask_to_continue => MatchState::AwaitingContinue,
            None => MatchState::AwaitingRound,
        };
        self.transition(next);
        Ok(next)
    }

    /// Apply the player's answer to "another round?".
    pub fn answer_continue(&mut self, keep_playing: bool) -> Result<MatchState, GameError> {
        if self.state != MatchState::AwaitingContinue {
            return Err(self.reject("answer continue"));
        }

        let next = if keep_playing {
            MatchState::AwaitingRound
        } else {
            MatchState::MatchOver(MatchEnd::Declined)
        };
        self.transition(next);
        Ok(next)
    }

    fn transition(&mut self, next: MatchState) {
        debug!("match: {} -> {}", self.state, next);
        self.state = next;
    }

    fn reject(&self, event: &str) -> GameError {
        GameError::InvalidTransition {
            state: self.state.to_string(),
            event: event.to_string(),
        }
    }
}
