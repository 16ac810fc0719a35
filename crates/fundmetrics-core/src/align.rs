//! Directional nearest-match over a sorted date index.
//!
//! Two metrics need to align an anchor date against an irregularly
//! sampled series: rolling returns look *backward* for the valuation at
//! or before a historical offset date, and SIP evaluation looks
//! *forward* for the first valuation at or after an installment date (an
//! installment on a non-trading day buys units at the next available
//! valuation, never a stale prior one). Both are the same primitive with
//! the direction flipped, so it lives here once.

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Direction constraint for nearest-date matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchDirection {
    /// Match the earliest indexed date at or after the anchor.
    Forward,
    /// Match the latest indexed date at or before the anchor.
    Backward,
}

/// Finds the element nearest to `anchor` in the given direction.
///
/// `items` must already be sorted ascending by the date that `key`
/// extracts; the search is a binary search (O(log n)). Returns `None`
/// when no element satisfies the direction constraint.
///
/// # Example
///
/// ```rust
/// use fundmetrics_core::align::{nearest_match, MatchDirection};
/// use fundmetrics_core::types::Date;
///
/// let dates = vec![
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Date::from_ymd(2024, 1, 10).unwrap(),
/// ];
/// let anchor = Date::from_ymd(2024, 1, 5).unwrap();
///
/// let before = nearest_match(&dates, |d| *d, anchor, MatchDirection::Backward);
/// assert_eq!(before, Some(&dates[0]));
///
/// let after = nearest_match(&dates, |d| *d, anchor, MatchDirection::Forward);
/// assert_eq!(after, Some(&dates[1]));
/// ```
pub fn nearest_match<T, K>(
    items: &[T],
    key: K,
    anchor: Date,
    direction: MatchDirection,
) -> Option<&T>
where
    K: Fn(&T) -> Date,
{
    match direction {
        MatchDirection::Backward => {
            let idx = items.partition_point(|item| key(item) <= anchor);
            idx.checked_sub(1).map(|i| &items[i])
        }
        MatchDirection::Forward => {
            let idx = items.partition_point(|item| key(item) < anchor);
            items.get(idx)
        }
    }
}
