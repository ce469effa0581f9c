//! Rock Paper Scissors Lizard Spock played at the terminal.

use std::num::NonZeroU32;

use log::info;
use serde::{Deserialize, Serialize};

use super::choice::{resolve, Choice};
use crate::console::{Console, LinePrompter, Messages};
use crate::core::config::threshold;
use crate::core::{GameError, GameRng, MatchConfig, Outcome};
use crate::rules::RoundGame;

const MESSAGES: &str = include_str!("../../../messages/rpsls.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpslsConfig {
    /// Round wins that end a match.
    pub grand_winner: NonZeroU32,
}

impl Default for RpslsConfig {
    fn default() -> Self {
        Self { grand_winner: threshold(3) }
    }
}

impl RpslsConfig {
    #[must_use]
    pub fn with_grand_winner(mut self, rounds: NonZeroU32) -> Self {
        self.grand_winner = rounds;
        self
    }
}

/// The user against a uniformly random computer.
#[derive(Clone, Debug)]
pub struct Rpsls {
    config: RpslsConfig,
    rng: GameRng,
}

impl Rpsls {
    pub fn new(config: RpslsConfig, rng: GameRng) -> Self {
        Self { config, rng }
    }

    /// Shared messages with the RPSLS table laid over them.
    pub fn messages() -> Result<Messages, GameError> {
        Ok(Messages::common()?.merge(Messages::from_json(MESSAGES)?))
    }

    pub fn config(&self) -> &RpslsConfig {
        &self.config
    }

    fn player_choice<P: LinePrompter>(console: &mut Console<P>) -> Result<Choice, GameError> {
        let names: Vec<&str> = Choice::ALL.iter().map(|c| c.name()).collect();
        let names = names.join(", ");

        loop {
            console.prompt_msg("line")?;
            console.prompt_render("choose", &[("choices", &names)])?;
            console.prompt_msg("abbreviations")?;

            let answer = console.read_answer()?;
            if let Some(choice) = Choice::parse(&answer) {
                return Ok(choice);
            }
            if console.input_closed() {
                return Err(GameError::InputClosed);
            }
            console.prompt_msg("not_valid")?;
        }
    }
}

impl RoundGame for Rpsls {
    fn match_config(&self) -> MatchConfig {
        MatchConfig::new(self.config.grand_winner.get()).without_continue_prompt()
    }

    fn play_round<P: LinePrompter>(&mut self, console: &mut Console<P>) -> Result<Outcome, GameError> {
        let player = Self::player_choice(console)?;
        let computer = *self.rng.choose(&Choice::ALL).ok_or_else(|| GameError::InvalidTransition {
            state: "no throws to choose from".to_string(),
            event: "computer throw".to_string(),
        })?;

        console.clear()?;
        console.prompt_render("you_chose", &[("choice", &player.name().to_uppercase())])?;
        console.prompt_render("computer_chose", &[("choice", &computer.name().to_uppercase())])?;

        let outcome = resolve(player, computer);
        console.blank_line()?;
        console.prompt_msg(match outcome {
            Outcome::Win => "win",
            Outcome::Loss => "lose",
            Outcome::Tie => "tie",
        })?;

        info!("round over: {player} vs {computer} -> {outcome:?}");
        Ok(outcome)
    }
}
