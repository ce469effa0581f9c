//! Rock Paper Scissors Lizard Spock.
//!
//! Each throw beats two others and loses to two. Rounds run back to back
//! without a continue prompt; first to three wins takes the match.

mod choice;
mod game;

pub use choice::{resolve, Choice};
pub use game::{Rpsls, RpslsConfig};
