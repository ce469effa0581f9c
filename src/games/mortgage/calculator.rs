//! The interactive calculator loop.

use log::{debug, info};

use super::payment::{parse_non_negative, parse_positive, Loan};
use crate::console::{Console, LinePrompter, Messages};
use crate::core::GameError;

const MESSAGES: &str = include_str!("../../../messages/mortgage.json");

/// Message keys the calculator uses.
pub const CALCULATOR_MESSAGES: &[&str] = &[
    "welcome",
    "line",
    "amount",
    "valid_amount",
    "apr",
    "apr_example",
    "valid_apr",
    "loan_duration",
    "loan_duration_months",
    "valid_duration",
    "zero_duration",
    "result",
    "again",
    "bye",
];

/// The calculator's message table.
pub fn messages() -> Result<Messages, GameError> {
    Messages::from_json(MESSAGES)
}

/// Run calculations until the user stops answering "y".
///
/// Running out of input ends the session quietly. Returns every loan
/// that was priced.
pub fn run<P: LinePrompter>(console: &mut Console<P>) -> Result<Vec<Loan>, GameError> {
    console.messages().require(CALCULATOR_MESSAGES)?;

    console.clear()?;
    console.prompt_msg("welcome")?;
    console.prompt_msg("line")?;

    let mut loans = Vec::new();
    match calculate_until_done(console, &mut loans) {
        Err(e) if e.is_input_closed() => info!("input closed, leaving calculator"),
        other => other?,
    }

    console.prompt_msg("bye")?;
    Ok(loans)
}

fn calculate_until_done<P: LinePrompter>(console: &mut Console<P>, loans: &mut Vec<Loan>) -> Result<(), GameError> {
    loop {
        let loan = read_loan(console)?;
        let payment = loan.monthly_payment();
        debug!("{loan:?} -> {payment}");
        loans.push(loan);

        console.clear()?;
        console.prompt_render("result", &[("payment", &format!("{payment:.2}"))])?;

        if !console.confirm("again", |answer| answer.starts_with('y'))? {
            return Ok(());
        }
    }
}

fn read_loan<P: LinePrompter>(console: &mut Console<P>) -> Result<Loan, GameError> {
    let amount_retry = console.messages().get("valid_amount").to_string();
    let apr_retry = console.messages().get("valid_apr").to_string();
    let duration_retry = console.messages().get("valid_duration").to_string();

    console.prompt_msg("amount")?;
    let amount = console.retry_until(&amount_retry, parse_positive)?;

    console.clear()?;
    console.prompt_msg("apr")?;
    console.prompt_msg("apr_example")?;
    let apr = console.retry_until(&apr_retry, parse_non_negative)?;

    console.prompt_msg("loan_duration")?;
    let years = console.retry_until(&duration_retry, parse_non_negative)?;

    loop {
        console.prompt_msg("loan_duration_months")?;
        let months = console.retry_until(&duration_retry, parse_non_negative)?;
        if let Some(loan) = Loan::new(amount, apr, years, months) {
            return Ok(loan);
        }
        console.prompt_msg("zero_duration")?;
    }
}
