//! # Fundmetrics Core
//!
//! Core types and abstractions for the fundmetrics investment-performance
//! library.
//!
//! This crate provides the foundational building blocks used throughout
//! fundmetrics:
//!
//! - **Types**: Domain-specific types like [`Date`](types::Date),
//!   [`NavSeries`](types::NavSeries), [`CashFlow`](types::CashFlow)
//! - **Day Count Conventions**: The fixed year bases the metrics use
//! - **Alignment**: Directional nearest-match over a sorted date index
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Typed records per entity instead of a generic
//!   tabular structure; the container guarantees date order
//! - **Explicit Over Implicit**: Each metric's day-count convention is a
//!   named type, not a buried constant
//!
//! ## Example
//!
//! ```rust
//! use fundmetrics_core::prelude::*;
//!
//! let series = NavSeries::new(vec![
//!     NavPoint::new(Date::from_ymd(2024, 1, 1).unwrap(), 100.0),
//!     NavPoint::new(Date::from_ymd(2024, 6, 1).unwrap(), 108.5),
//! ])
//! .unwrap();
//! assert_eq!(series.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod align;
pub mod daycounts;
pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::align::MatchDirection;
    pub use crate::daycounts::{Act365Fixed, Act365Quarter, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, ContributionEntry, Date, NavPoint, NavSeries, Period};
}
