//! Compound annual growth rate.

use fundmetrics_core::daycounts::{Act365Fixed, DayCount};
use fundmetrics_core::types::{NavPoint, NavSeries};
use fundmetrics_math::round_to;

use crate::error::{ReturnsError, ReturnsResult};

/// Calculates the compound annual growth rate over a series' full span.
///
/// Elapsed time is actual days over a flat 365 basis, the project's
/// fixed day-count convention for growth rates. The result is rounded
/// to 3 decimal places (0.123 means 12.3% annualized).
///
/// The series is already date-ordered by construction; the endpoints
/// are its first and last observations.
///
/// # Errors
///
/// Returns `ReturnsError::InvalidInput` when the series is empty or
/// spans zero days (single observation or duplicate endpoint dates).
///
/// # Example
///
/// ```rust
/// use fundmetrics_core::types::{Date, NavPoint, NavSeries};
/// use fundmetrics_returns::cagr;
///
/// let series = NavSeries::new(vec![
///     NavPoint::new(Date::from_ymd(2021, 1, 1).unwrap(), 100.0),
///     NavPoint::new(Date::from_ymd(2024, 1, 1).unwrap(), 150.0),
/// ])
/// .unwrap();
///
/// let rate = cagr(&series).unwrap();
/// assert!(rate > 0.14 && rate < 0.15);
/// ```
pub fn cagr(series: &NavSeries) -> ReturnsResult<f64> {
    match (series.first(), series.last()) {
        (Some(start), Some(end)) => cagr_between(start, end),
        _ => Err(ReturnsError::invalid_input(
            "CAGR requires a non-empty NAV series",
        )),
    }
}

/// The CAGR formula applied to an explicit pair of observations.
///
/// `start` must be dated strictly before `end`. Used directly by the
/// trailing-window table, which picks its own start observation.
///
/// # Errors
///
/// Returns `ReturnsError::InvalidInput` when the start value is not
/// positive or the elapsed span is not positive.
pub fn cagr_between(start: &NavPoint, end: &NavPoint) -> ReturnsResult<f64> {
    let years = Act365Fixed.year_fraction(start.date, end.date);

    if start.value <= 0.0 || years <= 0.0 {
        return Err(ReturnsError::invalid_input(format!(
            "CAGR undefined for start value {} over {:.4} years",
            start.value, years
        )));
    }

    let rate = (end.value / start.value).powf(1.0 / years) - 1.0;
    Ok(round_to(rate, 3))
}
