//! Game implementations.
//!
//! Three round games share the match loop in `rules`; the mortgage
//! calculator stands alone.
//!
//! - `twenty_one`: the player against a dealer who draws to 17
//! - `tic_tac_toe`: 3x3 board against a priority-rule computer
//! - `rpsls`: Rock Paper Scissors Lizard Spock
//! - `mortgage`: monthly payment calculator

pub mod mortgage;
pub mod rpsls;
pub mod tic_tac_toe;
pub mod twenty_one;
