//! Mortgage payment calculator.
//!
//! Asks for the loan amount, APR and duration, then prints the monthly
//! payment. Not a round game: there is no score and no opponent.

mod calculator;
mod payment;

pub use calculator::{messages, run, CALCULATOR_MESSAGES};
pub use payment::{monthly_payment, parse_non_negative, parse_number, parse_positive, Loan};
