//! # Fundmetrics Returns
//!
//! The return-metrics engine: standard investment-performance metrics
//! over date-indexed NAV series and cash flows.
//!
//! - **[`cagr`]**: Compound annual growth rate over a series' span
//! - **[`trailing::trailing_cagr`]**: CAGR over a family of lookback
//!   windows with explicit "insufficient history" entries
//! - **[`rolling::rolling_returns`]**: Per-date lookback returns
//!   reduced to max/min/average
//! - **[`xirr::xirr`]**: Extended internal rate of return for
//!   irregular cash flows (Newton-Raphson)
//! - **[`sip::sip_returns`]**: Systematic-investment-plan outcome
//!   against a NAV series
//!
//! Every metric is a synchronous, stateless pure function over
//! immutable inputs: nothing is cached or shared between calls, inputs
//! are never mutated, and identical inputs produce bit-identical
//! output. Callers may freely invoke any of them from independent
//! threads.
//!
//! ## Day counts
//!
//! CAGR and XIRR convert days to years over a flat 365 basis; the SIP
//! annualized approximation uses 365.25. The difference is deliberate
//! and preserved; see `fundmetrics_core::daycounts`.
//!
//! ## Example
//!
//! ```rust
//! use fundmetrics_returns::prelude::*;
//!
//! let series = NavSeries::new(vec![
//!     NavPoint::new(Date::from_ymd(2021, 1, 1).unwrap(), 100.0),
//!     NavPoint::new(Date::from_ymd(2024, 1, 1).unwrap(), 141.0),
//! ])
//! .unwrap();
//!
//! let rate = cagr(&series).unwrap();
//! assert!(rate > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod growth;
pub mod rolling;
pub mod sip;
pub mod trailing;
pub mod xirr;

pub use error::{ReturnsError, ReturnsResult};
pub use growth::cagr;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ReturnsError, ReturnsResult};
    pub use crate::growth::{cagr, cagr_between};
    pub use crate::rolling::{rolling_returns, RollingReturns};
    pub use crate::sip::{sip_returns, SipReturns};
    pub use crate::trailing::{trailing_cagr, Window};
    pub use crate::xirr::{xirr, xirr_cashflows, XirrConfig};

    pub use fundmetrics_core::types::{
        CashFlow, ContributionEntry, Date, NavPoint, NavSeries, Period,
    };
}
