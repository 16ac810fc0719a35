//! Actual/365 day count variants.

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of days between dates; the year
/// basis is always 365 days, ignoring leap years. This is the project's
/// fixed convention for CAGR and XIRR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 365.0
    }
}

/// Actual/365.25 day count convention.
///
/// Averages the leap cycle into the basis. Used only by the SIP
/// annualized-return approximation; every other metric uses
/// [`Act365Fixed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Quarter;

impl DayCount for Act365Quarter {
    fn name(&self) -> &'static str {
        "ACT/365.25"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 365.25
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act365f_full_year() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 365);
        assert_relative_eq!(dc.year_fraction(start, end), 1.0);
    }

    #[test]
    fn test_act365f_leap_year_exceeds_one() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        assert_eq!(dc.day_count(start, end), 366);
        assert!(dc.year_fraction(start, end) > 1.0);
    }

    #[test]
    fn test_act365q_basis() {
        let dc = Act365Quarter;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = start.add_days(365);

        assert_relative_eq!(dc.year_fraction(start, end), 365.0 / 365.25);
    }

    #[test]
    fn test_same_day_is_zero() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(Act365Fixed.day_count(date, date), 0);
        assert_relative_eq!(Act365Fixed.year_fraction(date, date), 0.0);
        assert_relative_eq!(Act365Quarter.year_fraction(date, date), 0.0);
    }
}
