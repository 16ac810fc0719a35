//! # Fundmetrics Math
//!
//! Numerical machinery for the fundmetrics investment-performance
//! library:
//!
//! - **Solvers**: A bounded Newton-Raphson root-finder with
//!   convergence and divergence guards, used by the XIRR metric
//! - **Rounding**: Fixed-decimal rounding for reportable figures

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod round;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use round::round_to;
