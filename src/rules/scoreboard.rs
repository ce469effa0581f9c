//! Running score for one match.

use serde::{Deserialize, Serialize};

use crate::core::{Actor, Outcome};

/// Wins, losses and ties for the current match.
///
/// Counters only move through `record`, so their sum always equals the
/// number of completed rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    wins: u32,
    losses: u32,
    ties: u32,
}

impl ScoreTally {
    /// A fresh tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completed round.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub fn losses(&self) -> u32 {
        self.losses
    }

    #[must_use]
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Completed rounds so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Whether either side has reached `threshold` round wins.
    #[must_use]
    pub fn is_grand_winner(&self, threshold: u32) -> bool {
        self.wins == threshold || self.losses == threshold
    }

    /// The side that reached `threshold` round wins, if any.
    #[must_use]
    pub fn grand_winner(&self, threshold: u32) -> Option<Actor> {
        if self.wins == threshold {
            Some(Actor::Human)
        } else if self.losses == threshold {
            Some(Actor::Computer)
        } else {
            None
        }
    }
}
