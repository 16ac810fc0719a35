//! Rolling return statistics.

use serde::{Deserialize, Serialize};

use fundmetrics_core::types::{Date, NavSeries, Period};
use fundmetrics_math::round_to;

use crate::error::{ReturnsError, ReturnsResult};

/// Summary statistics of the per-date rolling returns.
///
/// Each period is the `(past_date, current_date)` observation pair that
/// produced the corresponding extreme; ties keep the earliest pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingReturns {
    /// The best single-period return.
    pub max_return: f64,
    /// The (then, now) dates achieving the maximum.
    pub max_period: (Date, Date),
    /// The worst single-period return.
    pub min_return: f64,
    /// The (then, now) dates achieving the minimum.
    pub min_period: (Date, Date),
    /// Arithmetic mean of all rolling returns.
    pub average_return: f64,
}

/// Computes rolling returns over a lookback period at every series
/// date.
///
/// For each observation dated `d`, the comparison value is the nearest
/// observation at or before `d - period` (backward as-of match). Dates
/// in the leading portion of the series with no such match are dropped;
/// a partial result set is expected, not an error. Each surviving
/// return is `(value_now - value_then) / value_then` rounded to 3
/// decimals, and the results reduce to max/min (with their date pairs)
/// and the mean, also rounded to 3 decimals.
///
/// # Errors
///
/// Returns `ReturnsError::EmptyResult` when no date has a valid
/// lookback match (the series is shorter than the period), and
/// `ReturnsError::InvalidInput` if the period offset cannot be applied.
///
/// # Example
///
/// ```rust
/// use fundmetrics_core::types::{Date, NavPoint, NavSeries, Period};
/// use fundmetrics_returns::rolling::rolling_returns;
///
/// let start = Date::from_ymd(2020, 1, 1).unwrap();
/// let points: Vec<NavPoint> = (0..800)
///     .map(|i| NavPoint::new(start.add_days(i), 100.0 + i as f64 * 0.05))
///     .collect();
/// let series = NavSeries::new(points).unwrap();
///
/// let stats = rolling_returns(&series, &Period::years(1)).unwrap();
/// assert!(stats.min_return > 0.0); // monotonically rising series
/// ```
pub fn rolling_returns(series: &NavSeries, period: &Period) -> ReturnsResult<RollingReturns> {
    let mut best: Option<(f64, (Date, Date))> = None;
    let mut worst: Option<(f64, (Date, Date))> = None;
    let mut sum = 0.0;
    let mut count = 0usize;

    for point in series.iter() {
        let offset = period.subtract_from(point.date)?;
        let Some(past) = series.at_or_before(offset) else {
            continue;
        };

        let ret = round_to((point.value - past.value) / past.value, 3);
        let pair = (past.date, point.date);

        match &best {
            Some((max, _)) if ret <= *max => {}
            _ => best = Some((ret, pair)),
        }
        match &worst {
            Some((min, _)) if ret >= *min => {}
            _ => worst = Some((ret, pair)),
        }
        sum += ret;
        count += 1;
    }

    match (best, worst) {
        (Some((max_return, max_period)), Some((min_return, min_period))) => Ok(RollingReturns {
            max_return,
            max_period,
            min_return,
            min_period,
            average_return: round_to(sum / count as f64, 3),
        }),
        _ => Err(ReturnsError::empty_result(format!(
            "no date in the series has a lookback match {period} earlier"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fundmetrics_core::types::NavPoint;

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
    fn test_monthly_series_one_year_lookback() {
        let s = series(&[
            ("2022-01-01", 100.0),
            ("2022-07-01", 110.0),
            ("2023-01-01", 120.0),
            ("2023-07-01", 99.0),
            ("2024-01-01", 130.0),
        ]);

        let stats = rolling_returns(&s, &Period::years(1)).unwrap();

        // Surviving dates: 2023-01-01 (vs 100), 2023-07-01 (vs 110),
        // 2024-01-01 (vs 120)
        assert_relative_eq!(stats.max_return, 0.2);
        assert_eq!(stats.max_period, (date("2022-01-01"), date("2023-01-01")));
        assert_relative_eq!(stats.min_return, -0.1);
        assert_eq!(stats.min_period, (date("2022-07-01"), date("2023-07-01")));
        assert_relative_eq!(stats.average_return, round_to((0.2 - 0.1 + 0.083) / 3.0, 3));
    }

    #[test]
    fn test_lookback_match_respects_period_bound() {
        let s = series(&[
            ("2022-01-01", 100.0),
            ("2022-11-15", 105.0),
            ("2023-06-01", 112.0),
            ("2024-03-01", 125.0),
        ]);

        let stats = rolling_returns(&s, &Period::years(1)).unwrap();

        // Every reported past date is at least a year before its
        // current date and never precedes the series start.
        for (then, now) in [stats.max_period, stats.min_period] {
            assert!(then <= Period::years(1).subtract_from(now).unwrap());
            assert!(then >= s.first().unwrap().date);
        }
    }

    #[test]
    fn test_series_shorter_than_period() {
        let s = series(&[("2024-01-01", 100.0), ("2024-03-01", 105.0)]);
        assert!(matches!(
            rolling_returns(&s, &Period::years(1)),
            Err(ReturnsError::EmptyResult(_))
        ));
    }

    #[test]
    fn test_first_occurrence_wins_ties() {
        // Two windows with the identical 10% return; the earlier pair
        // must be reported.
        let s = series(&[
            ("2022-01-01", 100.0),
            ("2022-02-01", 200.0),
            ("2023-01-01", 110.0),
            ("2023-02-01", 220.0),
        ]);

        let stats = rolling_returns(&s, &Period::years(1)).unwrap();
        assert_relative_eq!(stats.max_return, 0.1);
        assert_eq!(stats.max_period, (date("2022-01-01"), date("2023-01-01")));
        assert_relative_eq!(stats.min_return, 0.1);
        assert_eq!(stats.min_period, (date("2022-01-01"), date("2023-01-01")));
    }

    #[test]
    fn test_idempotent() {
        let s = series(&[
            ("2022-01-01", 100.0),
            ("2023-01-01", 120.0),
            ("2024-01-01", 130.0),
        ]);
        let a = rolling_returns(&s, &Period::default()).unwrap();
        let b = rolling_returns(&s, &Period::default()).unwrap();
        assert_eq!(a, b);
    }
}
