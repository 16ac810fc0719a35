//! Domain types for investment-performance metrics.
//!
//! This module provides type-safe representations of the entities the
//! metrics operate on:
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Period`]: Calendar offset for lookback windows
//! - [`NavPoint`] / [`NavSeries`]: Dated per-unit valuations
//! - [`CashFlow`]: Signed dated cash flow (XIRR input)
//! - [`ContributionEntry`]: One SIP installment

mod cashflow;
mod date;
mod nav;
mod period;

pub use cashflow::{CashFlow, ContributionEntry};
pub use date::Date;
pub use nav::{NavPoint, NavSeries};
pub use period::Period;
