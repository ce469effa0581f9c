//! Player and dealer turn state machines.
//!
//! Player:
//!
//! ```text
//! AwaitingChoice ──hit, total <= 21──▶ AwaitingChoice
//! AwaitingChoice ──hit, total > 21───▶ Busted
//! AwaitingChoice ──stand─────────────▶ Standing
//! ```
//!
//! Dealer: draws while the total is under the floor, then stands or busts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::hand::is_bust;
use crate::core::GameError;

/// What the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnChoice {
    Hit,
    Stand,
}

impl TurnChoice {
    /// Parse `h`/`hit` or `s`/`stay`/`stand`, ignoring case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "h" | "hit" => Some(TurnChoice::Hit),
            "s" | "stay" | "stand" => Some(TurnChoice::Stand),
            _ => None,
        }
    }
}

/// The player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerTurn {
    AwaitingChoice,
    Busted,
    Standing,
}

impl PlayerTurn {
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, PlayerTurn::AwaitingChoice)
    }

    /// Next state after `choice`, given the hand total once it is applied.
    pub fn next(self, choice: TurnChoice, total: u32) -> Result<Self, GameError> {
        match (self, choice) {
            (PlayerTurn::AwaitingChoice, TurnChoice::Hit) if is_bust(total) => Ok(PlayerTurn::Busted),
            (PlayerTurn::AwaitingChoice, TurnChoice::Hit) => Ok(PlayerTurn::AwaitingChoice),
            (PlayerTurn::AwaitingChoice, TurnChoice::Stand) => Ok(PlayerTurn::Standing),
            (finished, choice) => Err(GameError::InvalidTransition {
                state: finished.to_string(),
                event: format!("{choice:?}").to_lowercase(),
            }),
        }
    }
}

impl fmt::Display for PlayerTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerTurn::AwaitingChoice => write!(f, "awaiting choice"),
            PlayerTurn::Busted => write!(f, "busted"),
            PlayerTurn::Standing => write!(f, "standing"),
        }
    }
}

/// The dealer's fixed policy applied to its current total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerTurn {
    /// Under the floor: take another card.
    Drawing,
    Busted,
    Standing,
}

impl DealerTurn {
    /// Decide what a dealer holding `total` does.
    #[must_use]
    pub fn decide(total: u32, floor: u32) -> Self {
        if is_bust(total) {
            DealerTurn::Busted
        } else if total < floor {
            DealerTurn::Drawing
        } else {
            DealerTurn::Standing
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, DealerTurn::Drawing)
    }
}
