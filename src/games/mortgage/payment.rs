//! Loan terms and the amortized payment formula.

use serde::{Deserialize, Serialize};

/// Monthly payment for a fully amortized loan.
///
/// `apr_percent` is the yearly rate in percent (6 for 6%). A zero rate
/// splits the amount evenly across the months.
///
/// ```
/// use parlor::games::mortgage::monthly_payment;
///
/// let payment = monthly_payment(100_000.0, 6.0, 360.0);
/// assert_eq!(format!("{payment:.2}"), "599.55");
/// ```
#[must_use]
pub fn monthly_payment(amount: f64, apr_percent: f64, months: f64) -> f64 {
    let rate = apr_percent / 100.0 / 12.0;
    if rate == 0.0 {
        amount / months
    } else {
        amount * rate / (1.0 - (1.0 + rate).powf(-months))
    }
}

/// Validated loan terms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub amount: f64,
    pub apr_percent: f64,
    pub months: f64,
}

impl Loan {
    /// Build a loan from years plus extra months.
    ///
    /// Returns `None` unless the amount is positive, the rate is not
    /// negative, and the loan lasts longer than zero months.
    #[must_use]
    pub fn new(amount: f64, apr_percent: f64, years: f64, extra_months: f64) -> Option<Self> {
        let months = years * 12.0 + extra_months;
        let valid = amount > 0.0 && apr_percent >= 0.0 && years >= 0.0 && extra_months >= 0.0 && months > 0.0;
        valid.then_some(Self { amount, apr_percent, months })
    }

    #[must_use]
    pub fn monthly_payment(&self) -> f64 {
        monthly_payment(self.amount, self.apr_percent, self.months)
    }
}

/// A finite decimal number.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A finite number greater than zero.
#[must_use]
pub fn parse_positive(input: &str) -> Option<f64> {
    parse_number(input).filter(|&n| n > 0.0)
}

/// A finite number of zero or more.
#[must_use]
pub fn parse_non_negative(input: &str) -> Option<f64> {
    parse_number(input).filter(|&n| n >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(payment: f64) -> String {
        format!("{payment:.2}")
    }

    #[test]
    fn test_thirty_year_at_six_percent() {
        assert_eq!(cents(monthly_payment(100_000.0, 6.0, 360.0)), "599.55");
    }

    #[test]
    fn test_zero_apr_divides_evenly() {
        assert_eq!(cents(monthly_payment(1_200.0, 0.0, 12.0)), "100.00");
        assert_eq!(cents(monthly_payment(1_000.0, 0.0, 3.0)), "333.33");
    }

    #[test]
    fn test_interest_raises_total_paid() {
        let flat = monthly_payment(250_000.0, 0.0, 180.0);
        let charged = monthly_payment(250_000.0, 3.5, 180.0);
        assert!(charged > flat);
        assert!(charged * 180.0 > 250_000.0);
    }

    #[test]
    fn test_loan_validation() {
        let loan = Loan::new(100_000.0, 6.0, 30.0, 0.0).unwrap();
        assert_eq!(loan.months, 360.0);
        assert_eq!(cents(loan.monthly_payment()), "599.55");

        assert_eq!(Loan::new(12_000.0, 0.0, 0.0, 6.0).map(|l| l.months), Some(6.0));
        assert!(Loan::new(0.0, 5.0, 1.0, 0.0).is_none());
        assert!(Loan::new(1_000.0, -1.0, 1.0, 0.0).is_none());
        assert!(Loan::new(1_000.0, 5.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(parse_number("2.5"), Some(2.5));
        assert_eq!(parse_number(" 10 "), Some(10.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number(""), None);

        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-3"), None);
        assert_eq!(parse_non_negative("0"), Some(0.0));
        assert_eq!(parse_non_negative("-0.5"), None);
    }
}
