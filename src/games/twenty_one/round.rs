//! One hand of Twenty-One, free of I/O.
//!
//! Both sides draw from the end of the same deck, player first.

use log::debug;

use super::card::{Card, Deck};
use super::hand::{is_bust, Hand};
use super::turn::{DealerTurn, PlayerTurn, TurnChoice};
use crate::core::{GameError, Outcome};

/// Classify a finished hand from the totals.
#[must_use]
pub fn resolve(player_total: u32, dealer_total: u32) -> Outcome {
    if is_bust(player_total) {
        Outcome::Loss
    } else if is_bust(dealer_total) || player_total > dealer_total {
        Outcome::Win
    } else if dealer_total > player_total {
        Outcome::Loss
    } else {
        Outcome::Tie
    }
}

/// Deck, both hands, and where each turn stands.
#[derive(Clone, Debug)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    player_turn: PlayerTurn,
    dealer_turn: Option<DealerTurn>,
    dealer_floor: u32,
}

impl Round {
    /// Deal `opening_cards` to the player, then to the dealer.
    pub fn deal(mut deck: Deck, opening_cards: usize, dealer_floor: u32) -> Result<Self, GameError> {
        let player: Hand = deck.deal(opening_cards)?.into_iter().collect();
        let dealer: Hand = deck.deal(opening_cards)?.into_iter().collect();
        debug!("dealt player {} / dealer {}", player.total(), dealer.total());

        Ok(Self {
            deck,
            player,
            dealer,
            player_turn: PlayerTurn::AwaitingChoice,
            dealer_turn: None,
            dealer_floor,
        })
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// The dealer card shown to the player during their turn.
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    pub fn player_turn(&self) -> PlayerTurn {
        self.player_turn
    }

    /// Apply one player choice; a hit draws before the total is checked.
    pub fn play(&mut self, choice: TurnChoice) -> Result<PlayerTurn, GameError> {
        if self.player_turn.is_finished() {
            return self.player_turn.next(choice, self.player.total());
        }
        if choice == TurnChoice::Hit {
            let card = self.deck.draw()?;
            self.player.push(card);
        }
        self.player_turn = self.player_turn.next(choice, self.player.total())?;
        Ok(self.player_turn)
    }

    /// Run one dealer decision. `Drawing` means a card was just taken.
    pub fn dealer_step(&mut self) -> Result<DealerTurn, GameError> {
        if self.player_turn != PlayerTurn::Standing {
            return Err(self.reject("dealer step"));
        }
        if self.dealer_turn.is_some_and(DealerTurn::is_finished) {
            return Err(self.reject("dealer step"));
        }

        let decision = DealerTurn::decide(self.dealer.total(), self.dealer_floor);
        if decision == DealerTurn::Drawing {
            let card = self.deck.draw()?;
            self.dealer.push(card);
        }
        self.dealer_turn = Some(decision);
        Ok(decision)
    }

    /// Run the dealer until it stands or busts.
    pub fn play_dealer(&mut self) -> Result<DealerTurn, GameError> {
        loop {
            let step = self.dealer_step()?;
            if step.is_finished() {
                return Ok(step);
            }
        }
    }

    /// The result, once both turns are over.
    pub fn outcome(&self) -> Option<Outcome> {
        let finished = match self.player_turn {
            PlayerTurn::AwaitingChoice => false,
            PlayerTurn::Busted => true,
            PlayerTurn::Standing => self.dealer_turn.is_some_and(DealerTurn::is_finished),
        };
        finished.then(|| resolve(self.player.total(), self.dealer.total()))
    }

    fn reject(&self, event: &str) -> GameError {
        GameError::InvalidTransition {
            state: format!("player {}", self.player_turn),
            event: event.to_string(),
        }
    }
}
