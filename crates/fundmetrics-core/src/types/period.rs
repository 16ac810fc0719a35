//! Calendar period offsets for lookback windows.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::CoreResult;

/// A calendar offset expressed in years, months, and days.
///
/// Used to anchor lookback windows: rolling returns subtract a `Period`
/// from each observation date to find the comparison date. Month and year
/// arithmetic clamps to the last valid day of the target month, so
/// `2024-03-31` minus one month is `2024-02-29`.
///
/// The default period is one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Whole calendar years.
    pub years: i32,
    /// Whole calendar months.
    pub months: i32,
    /// Calendar days.
    pub days: i64,
}

impl Period {
    /// A period of `n` calendar years.
    #[must_use]
    pub fn years(n: i32) -> Self {
        Self {
            years: n,
            months: 0,
            days: 0,
        }
    }

    /// A period of `n` calendar months.
    #[must_use]
    pub fn months(n: i32) -> Self {
        Self {
            years: 0,
            months: n,
            days: 0,
        }
    }

    /// A period of `n` calendar days.
    #[must_use]
    pub fn days(n: i64) -> Self {
        Self {
            years: 0,
            months: 0,
            days: n,
        }
    }

    /// Applies this period backwards from `date`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn subtract_from(&self, date: Date) -> CoreResult<Date> {
        let shifted = date.add_years(-self.years)?.add_months(-self.months)?;
        Ok(shifted.add_days(-self.days))
    }
}

impl Default for Period {
    fn default() -> Self {
        Self::years(1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Y{}M{}D", self.years, self.months, self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_year() {
        assert_eq!(Period::default(), Period::years(1));
    }

    #[test]
    fn test_subtract_year() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        let past = Period::years(1).subtract_from(date).unwrap();
        assert_eq!(past, Date::from_ymd(2023, 6, 15).unwrap());
    }

    #[test]
    fn test_subtract_clamps_leap_day() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        let past = Period::years(1).subtract_from(date).unwrap();
        assert_eq!(past, Date::from_ymd(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_subtract_months_and_days() {
        let date = Date::from_ymd(2024, 3, 31).unwrap();
        let past = Period::months(1).subtract_from(date).unwrap();
        assert_eq!(past, Date::from_ymd(2024, 2, 29).unwrap());

        let past = Period::days(90).subtract_from(date).unwrap();
        assert_eq!(past, Date::from_ymd(2024, 1, 1).unwrap());
    }
}
