//! Extended internal rate of return for irregular cash flows.

use serde::{Deserialize, Serialize};

use fundmetrics_core::types::{CashFlow, Date};
use fundmetrics_math::round_to;
use fundmetrics_math::solvers::{newton_raphson, SolverConfig};

use crate::error::{ReturnsError, ReturnsResult};

/// Lowest admissible rate: a 99% annual loss.
pub const XIRR_MIN_RATE: f64 = -0.99;

/// Highest admissible rate: a 1000% annual gain.
pub const XIRR_MAX_RATE: f64 = 10.0;

/// Configuration for the XIRR solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XirrConfig {
    /// Initial rate guess.
    pub guess: f64,
    /// Maximum Newton-Raphson iterations.
    pub max_iterations: u32,
    /// Convergence tolerance on the NPV residual.
    pub tolerance: f64,
}

impl Default for XirrConfig {
    fn default() -> Self {
        Self {
            guess: 0.10,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl XirrConfig {
    /// Sets the initial guess. A caller retrying after a convergence
    /// failure would change this.
    #[must_use]
    pub fn with_guess(mut self, guess: f64) -> Self {
        self.guess = guess;
        self
    }
}

/// Calculates the extended internal rate of return for irregular cash
/// flows given as parallel amount/date lists.
///
/// By sign convention, investments are negative and redemptions
/// positive. The solved rate is the one that zeroes
/// `NPV(r) = sum(cf_i / (1+r)^(days_i/365))` with days counted from the
/// earliest flow; it is found by Newton-Raphson with an analytic
/// derivative and rounded to 6 decimals. The input lists need not be
/// sorted.
///
/// Every run is an independent, deterministic pure function of its
/// inputs; there is no retry built in.
///
/// # Errors
///
/// - `ReturnsError::InvalidInput` for mismatched list lengths or fewer
///   than 2 cash flows
/// - `ReturnsError::ConvergenceFailure` when the iteration cap is
///   exhausted or the NPV derivative degenerates
/// - `ReturnsError::OutOfBounds` when an iterate leaves
///   [`XIRR_MIN_RATE`, `XIRR_MAX_RATE`]
///
/// # Example
///
/// ```rust
/// use fundmetrics_core::types::Date;
/// use fundmetrics_returns::xirr::{xirr, XirrConfig};
///
/// let amounts = [-5000.0, -5000.0, -5000.0, 17500.0];
/// let dates = [
///     Date::from_ymd(2020, 1, 1).unwrap(),
///     Date::from_ymd(2020, 7, 1).unwrap(),
///     Date::from_ymd(2021, 1, 1).unwrap(),
///     Date::from_ymd(2021, 12, 31).unwrap(),
/// ];
///
/// let rate = xirr(&amounts, &dates, &XirrConfig::default()).unwrap();
/// assert!((rate - 0.11).abs() < 0.01);
/// ```
pub fn xirr(amounts: &[f64], dates: &[Date], config: &XirrConfig) -> ReturnsResult<f64> {
    if amounts.len() != dates.len() {
        return Err(ReturnsError::invalid_input(format!(
            "cashflows and dates must have the same length ({} vs {})",
            amounts.len(),
            dates.len()
        )));
    }

    let flows: Vec<CashFlow> = amounts
        .iter()
        .zip(dates)
        .map(|(amount, date)| CashFlow::new(*date, *amount))
        .collect();

    xirr_cashflows(&flows, config)
}

/// [`xirr`] over the typed cash-flow record.
///
/// # Errors
///
/// As for [`xirr`], except the mismatched-lengths case cannot occur.
pub fn xirr_cashflows(flows: &[CashFlow], config: &XirrConfig) -> ReturnsResult<f64> {
    if flows.len() < 2 {
        return Err(ReturnsError::invalid_input(format!(
            "at least 2 cash flows are required, got {}",
            flows.len()
        )));
    }

    let mut sorted = flows.to_vec();
    sorted.sort_by_key(|cf| cf.date);

    // Time of each flow in flat-365 years from the earliest flow
    let start = sorted[0].date;
    let terms: Vec<(f64, f64)> = sorted
        .iter()
        .map(|cf| (cf.amount, start.days_between(&cf.date) as f64 / 365.0))
        .collect();

    let npv = |rate: f64| {
        terms
            .iter()
            .map(|(cf, t)| cf / (1.0 + rate).powf(*t))
            .sum::<f64>()
    };
    let npv_derivative = |rate: f64| {
        terms
            .iter()
            .map(|(cf, t)| -cf * t / (1.0 + rate).powf(t + 1.0))
            .sum::<f64>()
    };

    let solver_config = SolverConfig::new(config.tolerance, config.max_iterations)
        .with_bounds(XIRR_MIN_RATE, XIRR_MAX_RATE);
    let result = newton_raphson(npv, npv_derivative, config.guess, &solver_config)?;

    Ok(round_to(result.root, 6))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_reference_round_trip() {
        let amounts = [-5000.0, -5000.0, -5000.0, 17500.0];
        let dates = [
            date("2020-01-01"),
            date("2020-07-01"),
            date("2021-01-01"),
            date("2021-12-31"),
        ];

        let rate = xirr(&amounts, &dates, &XirrConfig::default()).unwrap();
        assert!((rate - 0.11).abs() < 0.01, "rate = {rate}");
    }

    #[test]
    fn test_net_loss_is_negative() {
        let amounts = [-10000.0, -10000.0, 18000.0];
        let dates = [date("2020-01-01"), date("2020-06-01"), date("2021-12-31")];

        let rate = xirr(&amounts, &dates, &XirrConfig::default()).unwrap();
        assert!(rate < 0.0, "rate = {rate}");
    }

    #[test]
    fn test_unsorted_input_gives_same_rate() {
        let sorted = xirr(
            &[-1000.0, 1250.0],
            &[date("2020-01-01"), date("2021-01-01")],
            &XirrConfig::default(),
        )
        .unwrap();
        let shuffled = xirr(
            &[1250.0, -1000.0],
            &[date("2021-01-01"), date("2020-01-01")],
            &XirrConfig::default(),
        )
        .unwrap();

        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_single_year_double() {
        // -1000 then 2000 one 365-day year later: exactly 100%
        let rate = xirr(
            &[-1000.0, 2000.0],
            &[date("2021-01-01"), date("2022-01-01")],
            &XirrConfig::default(),
        )
        .unwrap();
        assert!((rate - 1.0).abs() < 1e-4, "rate = {rate}");
    }

    #[test]
    fn test_mismatched_lengths() {
        let result = xirr(
            &[-1000.0, 1100.0],
            &[date("2020-01-01")],
            &XirrConfig::default(),
        );
        assert!(matches!(result, Err(ReturnsError::InvalidInput(_))));
    }

    #[test]
    fn test_fewer_than_two_flows() {
        let result = xirr(&[-1000.0], &[date("2020-01-01")], &XirrConfig::default());
        assert!(matches!(result, Err(ReturnsError::InvalidInput(_))));

        let result = xirr_cashflows(&[], &XirrConfig::default());
        assert!(matches!(result, Err(ReturnsError::InvalidInput(_))));
    }

    #[test]
    fn test_retry_with_different_guess() {
        // A pathological guess can fail; the documented recovery is to
        // retry with another one.
        let amounts = [-1000.0, 1100.0];
        let dates = [date("2020-01-01"), date("2021-01-01")];

        let config = XirrConfig::default().with_guess(9.9);
        let result = xirr(&amounts, &dates, &config);
        if result.is_err() {
            let retried = xirr(&amounts, &dates, &XirrConfig::default()).unwrap();
            assert!((retried - 0.10).abs() < 0.01);
        }
    }

    #[test]
    fn test_idempotent() {
        let amounts = [-5000.0, -5000.0, 12000.0];
        let dates = [date("2020-01-01"), date("2020-07-01"), date("2021-07-01")];

        let a = xirr(&amounts, &dates, &XirrConfig::default()).unwrap();
        let b = xirr(&amounts, &dates, &XirrConfig::default()).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
