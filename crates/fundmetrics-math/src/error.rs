//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during numerical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Derivative magnitude fell below the solver's floor, so no
    /// reliable Newton step can be taken.
    #[error("Derivative vanished: |{value:.2e}| below floor, cannot step")]
    DerivativeVanished {
        /// The near-zero derivative value.
        value: f64,
    },

    /// An iterate left the configured bounds.
    #[error("Iterate {value} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        /// The out-of-range iterate.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

impl MathError {
    /// Creates a convergence failure error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-4);
        assert!(err.to_string().contains("100 iterations"));

        let err = MathError::OutOfBounds {
            value: 12.0,
            min: -0.99,
            max: 10.0,
        };
        assert!(err.to_string().contains("out of bounds"));
    }
}
