//! The five throws and what beats what.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Outcome;

/// One throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Choice {
    pub const ALL: [Choice; 5] = [
        Choice::Rock,
        Choice::Paper,
        Choice::Scissors,
        Choice::Lizard,
        Choice::Spock,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
            Choice::Lizard => "lizard",
            Choice::Spock => "spock",
        }
    }

    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Choice::Rock => "r",
            Choice::Paper => "p",
            Choice::Scissors => "sc",
            Choice::Lizard => "l",
            Choice::Spock => "sp",
        }
    }

    /// Parse a full name or abbreviation, ignoring case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == input || c.abbreviation() == input)
    }

    /// The two throws this one defeats.
    #[must_use]
    pub const fn defeats(self) -> [Choice; 2] {
        match self {
            Choice::Rock => [Choice::Scissors, Choice::Lizard],
            Choice::Paper => [Choice::Rock, Choice::Spock],
            Choice::Scissors => [Choice::Paper, Choice::Lizard],
            Choice::Lizard => [Choice::Spock, Choice::Paper],
            Choice::Spock => [Choice::Scissors, Choice::Rock],
        }
    }

    #[must_use]
    pub fn beats(self, other: Choice) -> bool {
        self.defeats().contains(&other)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result for the player throwing `player` against `computer`.
#[must_use]
pub fn resolve(player: Choice, computer: Choice) -> Outcome {
    if player.beats(computer) {
        Outcome::Win
    } else if player == computer {
        Outcome::Tie
    } else {
        Outcome::Loss
    }
}
