//! Twenty-One played at the terminal.

use std::num::NonZeroU32;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::card::{Card, Deck};
use super::hand::{Hand, LIMIT};
use super::round::Round;
use super::turn::{DealerTurn, PlayerTurn, TurnChoice};
use crate::console::{Console, LinePrompter, Messages};
use crate::core::config::threshold;
use crate::core::{GameError, GameRng, MatchConfig, Outcome};
use crate::rules::RoundGame;

const MESSAGES: &str = include_str!("../../../messages/twenty_one.json");

/// Twenty-One settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwentyOneConfig {
    /// The dealer draws while under this total.
    pub dealer_floor: u32,

    /// Round wins that end a match.
    pub grand_winner: NonZeroU32,

    /// Cards dealt to each side at the start of a round.
    pub opening_cards: usize,
}

impl Default for TwentyOneConfig {
    fn default() -> Self {
        Self {
            dealer_floor: 17,
            grand_winner: threshold(5),
            opening_cards: 2,
        }
    }
}

impl TwentyOneConfig {
    #[must_use]
    pub fn with_grand_winner(mut self, rounds: NonZeroU32) -> Self {
        self.grand_winner = rounds;
        self
    }

    #[must_use]
    pub fn with_dealer_floor(mut self, floor: u32) -> Self {
        self.dealer_floor = floor;
        self
    }
}

/// The player against the dealer.
#[derive(Clone, Debug)]
pub struct TwentyOne {
    config: TwentyOneConfig,
    rng: GameRng,
}

impl TwentyOne {
    pub fn new(config: TwentyOneConfig, rng: GameRng) -> Self {
        Self { config, rng }
    }

    /// Shared messages with the Twenty-One table laid over them.
    pub fn messages() -> Result<Messages, GameError> {
        Ok(Messages::common()?.merge(Messages::from_json(MESSAGES)?))
    }

    pub fn config(&self) -> &TwentyOneConfig {
        &self.config
    }

    fn player_turn<P: LinePrompter>(&self, round: &mut Round, console: &mut Console<P>) -> Result<(), GameError> {
        while !round.player_turn().is_finished() {
            let choice = console.ask_msg("hit_or_stay", "h_or_s", TurnChoice::parse)?;
            console.clear()?;

            let turn = round.play(choice)?;
            debug!("player {:?} -> {:?} at {}", choice, turn, round.player().total());
            if choice == TurnChoice::Hit {
                console.prompt_msg("hit")?;
                show_player_hand(console, round.player())?;
            }
        }

        console.clear()?;
        match round.player_turn() {
            PlayerTurn::Busted => console.prompt_msg("busted"),
            _ => console.prompt_msg("stay"),
        }
    }

    fn dealer_turn<P: LinePrompter>(&self, round: &mut Round, console: &mut Console<P>) -> Result<(), GameError> {
        console.prompt_msg("dealer_turn")?;
        loop {
            match round.dealer_step()? {
                DealerTurn::Drawing => console.prompt_msg("dealer_hit")?,
                DealerTurn::Standing => return console.prompt_msg("dealer_stay"),
                DealerTurn::Busted => {
                    let total = round.dealer().total();
                    return console.prompt_render("dealer_busted", &[("total", &total)]);
                }
            }
        }
    }
}

impl RoundGame for TwentyOne {
    fn match_config(&self) -> MatchConfig {
        MatchConfig::new(self.config.grand_winner.get())
    }

    fn play_round<P: LinePrompter>(&mut self, console: &mut Console<P>) -> Result<Outcome, GameError> {
        console.clear()?;

        let deck = Deck::shuffled(&mut self.rng.fork());
        let mut round = Round::deal(deck, self.config.opening_cards, self.config.dealer_floor)?;

        show_player_hand(console, round.player())?;
        if let Some(card) = round.dealer_up_card() {
            console.blank_line()?;
            console.prompt_msg("dealer_shows")?;
            print_card(console, card)?;
        }

        self.player_turn(&mut round, console)?;
        if round.player_turn() == PlayerTurn::Standing {
            self.dealer_turn(&mut round, console)?;
        }

        let outcome = round.outcome().ok_or_else(|| GameError::InvalidTransition {
            state: format!("player {}", round.player_turn()),
            event: "resolve round".to_string(),
        })?;

        if !round.player().is_bust() && !round.dealer().is_bust() {
            console.blank_line()?;
            console.prompt_msg(match outcome {
                Outcome::Win => "congrats",
                Outcome::Loss => "dealer_won",
                Outcome::Tie => "tie",
            })?;
        }
        show_final_hands(console, &round)?;

        info!(
            "round over: player {} dealer {} -> {:?}",
            round.player().total(),
            round.dealer().total(),
            outcome
        );
        Ok(outcome)
    }

    fn rules_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", LIMIT.to_string()),
            ("dealer_floor", self.config.dealer_floor.to_string()),
        ]
    }
}

fn print_card<P: LinePrompter>(console: &mut Console<P>, card: Card) -> Result<(), GameError> {
    console.prompt_render("card_line", &[("rank", &card.rank.name()), ("suit", &card.suit.name())])
}

fn print_cards<P: LinePrompter>(console: &mut Console<P>, hand: &Hand) -> Result<(), GameError> {
    hand.cards().iter().try_for_each(|&card| print_card(console, card))
}

fn show_player_hand<P: LinePrompter>(console: &mut Console<P>, hand: &Hand) -> Result<(), GameError> {
    console.blank_line()?;
    console.prompt_render("cards_held", &[("count", &hand.len())])?;
    print_cards(console, hand)?;
    console.blank_line()?;
    console.prompt_render("hand_total", &[("total", &hand.total())])
}

fn show_final_hands<P: LinePrompter>(console: &mut Console<P>, round: &Round) -> Result<(), GameError> {
    let line = console.messages().get("line").to_string();

    console.blank_line()?;
    let header = console.messages().get("final_hands").to_string();
    console.print(&header)?;

    console.prompt_msg("dealer_had")?;
    print_cards(console, round.dealer())?;
    console.prompt_render("for_a_total", &[("total", &round.dealer().total())])?;
    console.print(&line)?;

    console.prompt_msg("you_had")?;
    print_cards(console, round.player())?;
    console.prompt_render("for_a_total", &[("total", &round.player().total())])?;
    console.print(&line)?;
    console.blank_line()
}
