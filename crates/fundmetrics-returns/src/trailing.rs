//! Trailing-window growth rate table.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use fundmetrics_core::types::NavSeries;

use crate::error::{ReturnsError, ReturnsResult};
use crate::growth::{cagr, cagr_between};

/// A lookback window anchored at the series' last date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Window {
    /// A window of `n` calendar years back from the last date.
    Years(u32),
    /// The entire available span.
    Max,
}

impl Window {
    /// The window's report label, e.g. `"3Y"` or `"Max"`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Window::Years(n) => format!("{n}Y"),
            Window::Max => "Max".to_string(),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Computes the annualized growth rate over a family of trailing
/// windows.
///
/// Each [`Window::Years`] window starts at the last series date minus
/// that many years. A window whose start precedes the series' first
/// date has insufficient history and reports `None` rather than
/// extrapolating. [`Window::Max`] always succeeds and covers the full
/// span. Results are keyed by window label.
///
/// # Errors
///
/// Returns `ReturnsError::InvalidInput` for an empty series, and
/// propagates CAGR failures for degenerate windows (e.g. a window
/// containing a single observation).
///
/// # Example
///
/// ```rust
/// use fundmetrics_core::types::{Date, NavPoint, NavSeries};
/// use fundmetrics_returns::trailing::{trailing_cagr, Window};
///
/// let series = NavSeries::new(vec![
///     NavPoint::new(Date::from_ymd(2022, 1, 1).unwrap(), 100.0),
///     NavPoint::new(Date::from_ymd(2024, 1, 1).unwrap(), 121.0),
/// ])
/// .unwrap();
///
/// let table = trailing_cagr(&series, &[Window::Years(5), Window::Max]).unwrap();
/// assert!(table["5Y"].is_none()); // only two years of history
/// assert!(table["Max"].is_some());
/// ```
pub fn trailing_cagr(
    series: &NavSeries,
    windows: &[Window],
) -> ReturnsResult<BTreeMap<String, Option<f64>>> {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(ReturnsError::invalid_input(
                "trailing CAGR requires a non-empty NAV series",
            ))
        }
    };

    let mut table = BTreeMap::new();

    for window in windows {
        let rate = match window {
            Window::Max => Some(cagr(series)?),
            Window::Years(n) => {
                let start_target = last.date.add_years(-(*n as i32))?;
                if start_target < first.date {
                    // Not enough historical data for this window
                    None
                } else {
                    let idx = series.position_at_or_after(start_target);
                    Some(cagr_between(&series.points()[idx], last)?)
                }
            }
        };
        table.insert(window.label(), rate);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fundmetrics_core::types::{Date, NavPoint};

    fn series(points: &[(&str, f64)]) -> NavSeries {
        NavSeries::new(
            points
                .iter()
                .map(|(d, v)| NavPoint::new(Date::parse(d).unwrap(), *v))
                .collect(),
        )
        .unwrap()
    }

    fn five_year_series() -> NavSeries {
        series(&[
            ("2019-06-01", 100.0),
            ("2020-06-01", 112.0),
            ("2021-06-01", 118.0),
            ("2022-06-01", 131.0),
            ("2023-06-01", 149.0),
            ("2024-06-01", 163.0),
        ])
    }

    #[test]
    fn test_labels() {
        assert_eq!(Window::Years(1).label(), "1Y");
        assert_eq!(Window::Years(10).label(), "10Y");
        assert_eq!(Window::Max.label(), "Max");
    }

    #[test]
    fn test_max_equals_full_span_cagr() {
        let s = five_year_series();
        let table = trailing_cagr(&s, &[Window::Max]).unwrap();
        assert_eq!(table["Max"], Some(cagr(&s).unwrap()));
    }

    #[test]
    fn test_insufficient_history_is_absent() {
        let s = five_year_series();
        let table = trailing_cagr(&s, &[Window::Years(1), Window::Years(10)]).unwrap();
        assert!(table["1Y"].is_some());
        assert_eq!(table["10Y"], None);
    }

    #[test]
    fn test_one_year_window_uses_window_endpoints() {
        let s = five_year_series();
        let table = trailing_cagr(&s, &[Window::Years(1)]).unwrap();
        // 149 -> 163 over 366 days (2024 is a leap year)
        let expected = (163.0_f64 / 149.0).powf(365.0 / 366.0) - 1.0;
        assert_relative_eq!(table["1Y"].unwrap(), expected, epsilon = 1e-3);
    }

    #[test]
    fn test_window_start_between_observations_snaps_forward() {
        // 2Y window from 2024-06-01 starts 2022-06-01; drop that exact
        // point so the window snaps to the next available observation.
        let s = series(&[
            ("2019-06-01", 100.0),
            ("2022-09-01", 120.0),
            ("2024-06-01", 150.0),
        ]);
        let table = trailing_cagr(&s, &[Window::Years(2)]).unwrap();
        let days = Date::parse("2022-09-01")
            .unwrap()
            .days_between(&Date::parse("2024-06-01").unwrap());
        let expected = (150.0_f64 / 120.0).powf(365.0 / days as f64) - 1.0;
        assert_relative_eq!(table["2Y"].unwrap(), expected, epsilon = 1e-3);
    }

    #[test]
    fn test_empty_series_fails() {
        let s = NavSeries::new(Vec::new()).unwrap();
        assert!(matches!(
            trailing_cagr(&s, &[Window::Max]),
            Err(ReturnsError::InvalidInput(_))
        ));
    }
}
