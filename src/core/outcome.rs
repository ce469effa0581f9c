//! Round results.

use serde::{Deserialize, Serialize};

use super::Actor;

/// Result of a completed round, from the human's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human won the round.
    Win,
    /// The computer won the round.
    Loss,
    /// Nobody won.
    Tie,
}

impl Outcome {
    /// Outcome of a round won by `actor`.
    #[must_use]
    pub const fn won_by(actor: Actor) -> Self {
        match actor {
            Actor::Human => Outcome::Win,
            Actor::Computer => Outcome::Loss,
        }
    }

    /// The actor who won, if anyone did.
    #[must_use]
    pub const fn winner(self) -> Option<Actor> {
        match self {
            Outcome::Win => Some(Actor::Human),
            Outcome::Loss => Some(Actor::Computer),
            Outcome::Tie => None,
        }
    }
}
