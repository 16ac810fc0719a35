//! NAV observation types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::align::{nearest_match, MatchDirection};
use crate::error::{CoreError, CoreResult};

/// A single per-unit valuation of a fund on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    /// Valuation date.
    pub date: Date,
    /// Per-unit value; always positive.
    pub value: f64,
}

impl NavPoint {
    /// Creates a new NAV point.
    #[must_use]
    pub fn new(date: Date, value: f64) -> Self {
        Self { date, value }
    }
}

impl fmt::Display for NavPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.value)
    }
}

/// A date-ordered series of NAV observations.
///
/// Construction sorts the points ascending by date and rejects
/// non-positive values, so every consumer can rely on order and
/// positivity without re-checking. Duplicate dates are a caller error
/// and are not detected; behavior over them is unspecified.
///
/// # Example
///
/// ```rust
/// use fundmetrics_core::types::{Date, NavPoint, NavSeries};
///
/// let series = NavSeries::new(vec![
///     NavPoint::new(Date::from_ymd(2024, 2, 1).unwrap(), 105.0),
///     NavPoint::new(Date::from_ymd(2024, 1, 1).unwrap(), 100.0),
/// ])
/// .unwrap();
///
/// // Sorted at construction
/// assert_eq!(series.first().unwrap().value, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavSeries {
    points: Vec<NavPoint>,
}

impl NavSeries {
    /// Creates a series from observations, sorting them by date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidValue` if any value is not positive
    /// or not finite.
    pub fn new(mut points: Vec<NavPoint>) -> CoreResult<Self> {
        for point in &points {
            if !(point.value > 0.0 && point.value.is_finite()) {
                return Err(CoreError::invalid_value(format!(
                    "NAV on {} must be a positive finite number, got {}",
                    point.date, point.value
                )));
            }
        }
        points.sort_by_key(|p| p.date);
        Ok(Self { points })
    }

    /// Returns the earliest observation, if any.
    #[must_use]
    pub fn first(&self) -> Option<&NavPoint> {
        self.points.first()
    }

    /// Returns the latest observation, if any.
    #[must_use]
    pub fn last(&self) -> Option<&NavPoint> {
        self.points.last()
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the observations as a date-ordered slice.
    #[must_use]
    pub fn points(&self) -> &[NavPoint] {
        &self.points
    }

    /// Returns an iterator over the observations in date order.
    pub fn iter(&self) -> impl Iterator<Item = &NavPoint> {
        self.points.iter()
    }

    /// Finds the observation nearest to `anchor` in the given direction.
    ///
    /// `Backward` returns the latest point dated at or before the anchor;
    /// `Forward` returns the earliest point dated at or after it. `None`
    /// when no observation satisfies the constraint. O(log n).
    #[must_use]
    pub fn nearest_match(&self, anchor: Date, direction: MatchDirection) -> Option<&NavPoint> {
        nearest_match(&self.points, |p| p.date, anchor, direction)
    }

    /// The latest observation dated at or before `date`.
    #[must_use]
    pub fn at_or_before(&self, date: Date) -> Option<&NavPoint> {
        self.nearest_match(date, MatchDirection::Backward)
    }

    /// The earliest observation dated at or after `date`.
    #[must_use]
    pub fn at_or_after(&self, date: Date) -> Option<&NavPoint> {
        self.nearest_match(date, MatchDirection::Forward)
    }

    /// Index of the earliest observation dated at or after `date`.
    ///
    /// Equals `len()` when every observation precedes `date`.
    #[must_use]
    pub fn position_at_or_after(&self, date: Date) -> usize {
        self.points.partition_point(|p| p.date < date)
    }
}

impl<'a> IntoIterator for &'a NavSeries {
    type Item = &'a NavPoint;
    type IntoIter = std::slice::Iter<'a, NavPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn series(points: &[(&str, f64)]) -> NavSeries {
        NavSeries::new(
            points
                .iter()
                .map(|(d, v)| NavPoint::new(date(d), *v))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_sorts_at_construction() {
        let s = series(&[("2024-03-01", 3.0), ("2024-01-01", 1.0), ("2024-02-01", 2.0)]);
        let dates: Vec<String> = s.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-02-01", "2024-03-01"]);
        assert_eq!(s.first().unwrap().value, 1.0);
        assert_eq!(s.last().unwrap().value, 3.0);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let result = NavSeries::new(vec![NavPoint::new(date("2024-01-01"), 0.0)]);
        assert!(result.is_err());
        let result = NavSeries::new(vec![NavPoint::new(date("2024-01-01"), -3.5)]);
        assert!(result.is_err());
        let result = NavSeries::new(vec![NavPoint::new(date("2024-01-01"), f64::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_at_or_before() {
        let s = series(&[("2024-01-01", 1.0), ("2024-01-10", 2.0), ("2024-01-20", 3.0)]);

        assert_eq!(s.at_or_before(date("2024-01-10")).unwrap().value, 2.0);
        assert_eq!(s.at_or_before(date("2024-01-15")).unwrap().value, 2.0);
        assert_eq!(s.at_or_before(date("2024-02-01")).unwrap().value, 3.0);
        assert!(s.at_or_before(date("2023-12-31")).is_none());
    }

    #[test]
    fn test_at_or_after() {
        let s = series(&[("2024-01-01", 1.0), ("2024-01-10", 2.0), ("2024-01-20", 3.0)]);

        assert_eq!(s.at_or_after(date("2024-01-10")).unwrap().value, 2.0);
        assert_eq!(s.at_or_after(date("2024-01-11")).unwrap().value, 3.0);
        assert_eq!(s.at_or_after(date("2023-01-01")).unwrap().value, 1.0);
        assert!(s.at_or_after(date("2024-02-01")).is_none());
    }

    #[test]
    fn test_position_at_or_after() {
        let s = series(&[("2024-01-01", 1.0), ("2024-01-10", 2.0)]);
        assert_eq!(s.position_at_or_after(date("2023-12-01")), 0);
        assert_eq!(s.position_at_or_after(date("2024-01-10")), 1);
        assert_eq!(s.position_at_or_after(date("2024-01-11")), 2);
    }
}
