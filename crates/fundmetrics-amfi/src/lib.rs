//! AMFI data access for fundmetrics.
//!
//! This crate talks to the Association of Mutual Funds in India (AMFI)
//! public endpoints and turns their payloads into the types the return
//! metrics consume:
//!
//! - **Scheme directory**: the full semicolon-delimited scheme dump,
//!   parsed into [`SchemeRecord`]s and kept warm in an injectable
//!   on-disk cache ([`CsvSchemeCache`]).
//! - **NAV history**: the historical NAV endpoint, paginated in
//!   five-year chunks and assembled into a date-ordered
//!   [`NavSeries`](fundmetrics_core::types::NavSeries).
//!
//! All network and parse failures propagate to the caller; nothing is
//! retried or swallowed.
//!
//! # Example
//!
//! ```rust,no_run
//! use fundmetrics_amfi::{AmfiClient, CsvSchemeCache};
//! use fundmetrics_core::types::Date;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = CsvSchemeCache::new("amfi_navall.csv");
//! let client = AmfiClient::connect(Box::new(cache)).await?;
//!
//! for house in client.fund_houses() {
//!     println!("{house}");
//! }
//!
//! let navs = client
//!     .nav_history("119551", Date::from_ymd(2020, 1, 1)?, Date::from_ymd(2024, 12, 31)?)
//!     .await?;
//! println!("{} NAV points", navs.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod client;
pub mod error;
pub mod schemes;

pub use cache::{CsvSchemeCache, NoopSchemeCache, SchemeCache};
pub use client::{AmfiClient, NavProvider, NAV_HISTORY_URL, SCHEMES_URL};
pub use error::{AmfiError, AmfiResult};
pub use schemes::{parse_scheme_dump, SchemeRecord};
