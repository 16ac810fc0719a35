//! Error taxonomy for the return metrics.
//!
//! Four kinds, each with a distinct caller contract:
//!
//! - [`ReturnsError::InvalidInput`] is a caller bug (malformed series,
//!   mismatched lengths, too few elements)
//! - [`ReturnsError::EmptyResult`] means no data survived a required
//!   alignment or window filter
//! - [`ReturnsError::ConvergenceFailure`] means the iterative solve did
//!   not reach tolerance or its derivative degenerated; retrying with a
//!   different initial guess is reasonable
//! - [`ReturnsError::OutOfBounds`] means the solved rate left the
//!   physically sane range
//!
//! Nothing is retried or swallowed internally; every failure surfaces
//! synchronously to the immediate caller.

use thiserror::Error;

use fundmetrics_core::error::CoreError;
use fundmetrics_math::error::MathError;

/// A specialized Result type for return-metric operations.
pub type ReturnsResult<T> = Result<T, ReturnsError>;

/// Errors raised by the return metrics.
#[derive(Error, Debug, Clone)]
pub enum ReturnsError {
    /// Malformed or insufficient input; a caller bug, not a data
    /// condition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No data survived a required alignment or window filter.
    #[error("empty result: {0}")]
    EmptyResult(String),

    /// The iterative solve did not converge, or its derivative became
    /// too small to take a reliable step.
    #[error("convergence failure: {reason}")]
    ConvergenceFailure {
        /// What stopped the solve.
        reason: String,
    },

    /// The solved rate left the physically sane range.
    #[error("rate {value} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        /// The out-of-range rate.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

impl ReturnsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Creates an empty result error.
    #[must_use]
    pub fn empty_result(reason: impl Into<String>) -> Self {
        Self::EmptyResult(reason.into())
    }
}

impl From<MathError> for ReturnsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
            } => ReturnsError::ConvergenceFailure {
                reason: format!(
                    "did not converge after {iterations} iterations (residual {residual:.2e})"
                ),
            },
            MathError::DerivativeVanished { value } => ReturnsError::ConvergenceFailure {
                reason: format!("derivative too small ({value:.2e}) to take a reliable step"),
            },
            MathError::OutOfBounds { value, min, max } => {
                ReturnsError::OutOfBounds { value, min, max }
            }
        }
    }
}

impl From<CoreError> for ReturnsError {
    fn from(err: CoreError) -> Self {
        ReturnsError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_mapping() {
        let err: ReturnsError = MathError::DerivativeVanished { value: 1e-12 }.into();
        assert!(matches!(err, ReturnsError::ConvergenceFailure { .. }));
        assert!(err.to_string().contains("derivative too small"));

        let err: ReturnsError = MathError::convergence_failed(100, 0.5).into();
        assert!(matches!(err, ReturnsError::ConvergenceFailure { .. }));
        assert!(err.to_string().contains("100 iterations"));

        let err: ReturnsError = MathError::OutOfBounds {
            value: 11.0,
            min: -0.99,
            max: 10.0,
        }
        .into();
        assert!(matches!(err, ReturnsError::OutOfBounds { .. }));
    }
}
