//! Systematic investment plan returns.

use log::debug;
use serde::{Deserialize, Serialize};

use fundmetrics_core::daycounts::{Act365Quarter, DayCount};
use fundmetrics_core::types::{ContributionEntry, NavSeries};
use fundmetrics_math::round_to;

use crate::error::{ReturnsError, ReturnsResult};

/// Aggregate outcome of a systematic investment plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipReturns {
    /// Sum of the matched contribution amounts (2 decimals).
    pub total_invested: f64,
    /// Value of all purchased units at the latest NAV (2 decimals).
    pub current_value: f64,
    /// `current_value - total_invested` (2 decimals).
    pub absolute_return: f64,
    /// Absolute return as a percentage of the invested amount; 0 when
    /// nothing was invested (2 decimals).
    pub return_percentage: f64,
    /// Annualized return percentage over the whole investment span.
    ///
    /// This is a simple compounding approximation on a 365.25-day year
    /// basis, not a true solve of the irregular cash flows; use
    /// [`crate::xirr`] for the exact rate. Defined as 0 when the span
    /// or invested amount is not positive, or when there are fewer
    /// than two contributions (2 decimals).
    pub annualized_return: f64,
    /// Units purchased across all matched contributions (4 decimals).
    pub total_units: f64,
    /// The chronologically latest NAV in the series (2 decimals).
    pub current_nav: f64,
    /// Days from the first contribution to the last NAV date; 0 when
    /// there are no contributions.
    pub investment_period_days: i64,
}

/// Evaluates a contribution schedule against a NAV series.
///
/// Each contribution buys units at the nearest NAV dated at or after
/// the contribution date: an installment on a non-trading day buys at
/// the next available valuation, never a stale prior one.
/// Contributions dated after the last NAV observation have nothing to
/// buy at and are silently excluded from both the invested-amount and
/// unit totals; that is a data-boundary condition, not an error.
///
/// # Errors
///
/// Returns `ReturnsError::InvalidInput` when the NAV series is empty or
/// any contribution amount is not positive.
///
/// # Example
///
/// ```rust
/// use fundmetrics_core::types::{ContributionEntry, Date, NavPoint, NavSeries};
/// use fundmetrics_returns::sip::sip_returns;
///
/// let nav = NavSeries::new(vec![
///     NavPoint::new(Date::from_ymd(2024, 1, 1).unwrap(), 100.0),
///     NavPoint::new(Date::from_ymd(2024, 2, 1).unwrap(), 110.0),
/// ])
/// .unwrap();
/// let plan = vec![ContributionEntry::new(Date::from_ymd(2024, 1, 1).unwrap(), 1000.0)];
///
/// let result = sip_returns(&plan, &nav).unwrap();
/// assert_eq!(result.total_invested, 1000.0);
/// assert_eq!(result.current_value, 1100.0);
/// ```
pub fn sip_returns(
    contributions: &[ContributionEntry],
    nav: &NavSeries,
) -> ReturnsResult<SipReturns> {
    let Some(latest) = nav.last() else {
        return Err(ReturnsError::invalid_input(
            "SIP evaluation requires a non-empty NAV series",
        ));
    };
    for entry in contributions {
        if !(entry.amount > 0.0 && entry.amount.is_finite()) {
            return Err(ReturnsError::invalid_input(format!(
                "contribution on {} must be a positive finite amount, got {}",
                entry.date, entry.amount
            )));
        }
    }

    let mut schedule = contributions.to_vec();
    schedule.sort_by_key(|entry| entry.date);

    let mut total_invested = 0.0;
    let mut total_units = 0.0;
    for entry in &schedule {
        // Forward match: buy at the valuation on or after the
        // installment date
        match nav.at_or_after(entry.date) {
            Some(point) => {
                total_invested += entry.amount;
                total_units += entry.amount / point.value;
            }
            None => {
                debug!(
                    "sip: contribution on {} has no subsequent NAV, excluded",
                    entry.date
                );
            }
        }
    }

    let current_nav = latest.value;
    let current_value = total_units * current_nav;
    let absolute_return = current_value - total_invested;
    let return_percentage = if total_invested > 0.0 {
        absolute_return / total_invested * 100.0
    } else {
        0.0
    };

    let investment_period_days = schedule
        .first()
        .map_or(0, |first| first.date.days_between(&latest.date));

    // Compounding approximation of the annualized rate, not an XIRR
    // solve over the individual installments
    let annualized_return = if schedule.len() > 1 {
        let years = Act365Quarter.year_fraction(schedule[0].date, latest.date);
        if years > 0.0 && total_invested > 0.0 {
            ((current_value / total_invested).powf(1.0 / years) - 1.0) * 100.0
        } else {
            0.0
        }
    } else {
        0.0
    };

    Ok(SipReturns {
        total_invested: round_to(total_invested, 2),
        current_value: round_to(current_value, 2),
        absolute_return: round_to(absolute_return, 2),
        return_percentage: round_to(return_percentage, 2),
        annualized_return: round_to(annualized_return, 2),
        total_units: round_to(total_units, 4),
        current_nav: round_to(current_nav, 2),
        investment_period_days,
    })
}
