//! Twenty-One, a blackjack-like card game.
//!
//! - Each side is dealt two cards from a fresh shuffled deck
//! - The player hits or stays until standing or busting
//! - The dealer then draws while under 17
//! - Higher total wins; going over 21 loses
//!
//! First to five round wins is the grand winner.

mod card;
mod game;
mod hand;
mod round;
mod turn;

pub use card::{Card, Deck, Rank, Suit};
pub use game::{TwentyOne, TwentyOneConfig};
pub use hand::{hand_total, is_bust, Hand, LIMIT};
pub use round::{resolve, Round};
pub use turn::{DealerTurn, PlayerTurn, TurnChoice};
