//! Cash flow and contribution types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A dated signed cash flow.
///
/// By the usual IRR sign convention, negative amounts are outflows
/// (money invested) and positive amounts are inflows (redemptions).
/// Dates need not be unique across a sequence of flows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Date the flow occurs.
    pub date: Date,
    /// Signed amount; negative = investment, positive = redemption.
    pub amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64) -> Self {
        Self { date, amount }
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.amount)
    }
}

/// One installment of a systematic investment plan.
///
/// Unlike [`CashFlow`], the amount is an unsigned investment and must
/// be positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionEntry {
    /// Date the installment is made.
    pub date: Date,
    /// Invested amount; always positive.
    pub amount: f64,
}

impl ContributionEntry {
    /// Creates a new contribution entry.
    #[must_use]
    pub fn new(date: Date, amount: f64) -> Self {
        Self { date, amount }
    }
}

impl fmt::Display for ContributionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(CashFlow::new(date, -5000.0).to_string(), "2024-01-01: -5000");
        assert_eq!(
            ContributionEntry::new(date, 1000.0).to_string(),
            "2024-01-01: 1000"
        );
    }
}
