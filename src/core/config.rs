//! Match configuration.
//!
//! Each game hands the match loop a `MatchConfig` at construction time:
//! - `grand_winner`: round wins that end the match
//! - `ask_to_continue`: whether the player is asked between rounds
//!
//! Nothing here is process-wide; two matches with different settings can
//! run side by side in the same test.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

const ZERO_THRESHOLD: &str = "Grand winner threshold must be at least 1";

/// Configuration for the match loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchConfig")]
pub struct MatchConfig {
    /// Round wins (by either side) that make a grand winner.
    pub grand_winner: u32,

    /// Ask "another round?" after each round that does not end the match.
    pub ask_to_continue: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            grand_winner: 3,
            ask_to_continue: true,
        }
    }
}

impl MatchConfig {
    /// Create a config with the given grand-winner threshold.
    pub fn new(grand_winner: u32) -> Self {
        assert!(grand_winner > 0, "{ZERO_THRESHOLD}");

        Self {
            grand_winner,
            ..Self::default()
        }
    }

    /// Play rounds back to back without asking in between.
    #[must_use]
    pub fn without_continue_prompt(mut self) -> Self {
        self.ask_to_continue = false;
        self
    }
}

/// Unchecked wire form; `MatchConfig` only exists once the threshold is valid.
#[derive(Deserialize)]
struct RawMatchConfig {
    grand_winner: u32,
    #[serde(default = "ask_by_default")]
    ask_to_continue: bool,
}

fn ask_by_default() -> bool {
    true
}

impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = String;

    fn try_from(raw: RawMatchConfig) -> Result<Self, Self::Error> {
        if raw.grand_winner == 0 {
            return Err(ZERO_THRESHOLD.to_string());
        }
        Ok(Self {
            grand_winner: raw.grand_winner,
            ask_to_continue: raw.ask_to_continue,
        })
    }
}

/// `n` as a per-game threshold constant.
pub(crate) const fn threshold(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => panic!("Grand winner threshold must be at least 1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.grand_winner, 3);
        assert!(config.ask_to_continue);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::new(5).without_continue_prompt();
        assert_eq!(config.grand_winner, 5);
        assert!(!config.ask_to_continue);
    }

    #[test]
    #[should_panic(expected = "Grand winner threshold must be at least 1")]
    fn test_zero_threshold() {
        MatchConfig::new(0);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::new(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_zero_threshold() {
        let err = serde_json::from_str::<MatchConfig>(r#"{"grand_winner": 0, "ask_to_continue": true}"#).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_deserialize_defaults_continue_prompt() {
        let config: MatchConfig = serde_json::from_str(r#"{"grand_winner": 2}"#).unwrap();
        assert_eq!(config, MatchConfig::new(2));
    }
}
