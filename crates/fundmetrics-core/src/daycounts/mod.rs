//! Day count conventions used by the return metrics.
//!
//! Each metric fixes its own year basis and the bases deliberately
//! differ: CAGR and XIRR divide actual days by a flat 365, while the SIP
//! annualized approximation divides by 365.25. The split reproduces the
//! published figures of each metric; unifying the bases would change
//! numeric outputs.
//!
//! # Usage
//!
//! ```rust
//! use fundmetrics_core::daycounts::{Act365Fixed, DayCount};
//! use fundmetrics_core::types::Date;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 1, 1).unwrap();
//! assert_eq!(dc.day_count(start, end), 366);
//! ```

mod act365;

pub use act365::{Act365Fixed, Act365Quarter};

use crate::types::Date;

/// A day count convention: how to turn two dates into elapsed years.
pub trait DayCount {
    /// Short conventional name, e.g. `"ACT/365F"`.
    fn name(&self) -> &'static str;

    /// Fraction of a year between `start` and `end`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Actual number of calendar days between `start` and `end`.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
