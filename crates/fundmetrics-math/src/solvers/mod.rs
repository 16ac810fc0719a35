//! Root-finding algorithms.
//!
//! The only solver the metrics need is [`newton_raphson`]: fast
//! quadratic convergence with an analytic derivative, plus two guards
//! that matter for discount-rate solving — a derivative floor (a flat
//! NPV curve gives no reliable step) and an optional bounds check that
//! rejects iterates outside a physically sane rate range instead of
//! letting the iteration run away.

mod newton;

pub use newton::newton_raphson;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default floor below which a derivative is treated as vanished.
pub const DEFAULT_DERIVATIVE_FLOOR: f64 = 1e-10;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence on the residual.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Closed interval the iterate must stay within, if any.
    pub bounds: Option<(f64, f64)>,
    /// Derivative magnitudes below this cannot produce a reliable step.
    pub derivative_floor: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bounds: None,
            derivative_floor: DEFAULT_DERIVATIVE_FLOOR,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Constrains iterates to the closed interval `[min, max]`.
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Sets the derivative floor.
    #[must_use]
    pub fn with_derivative_floor(mut self, floor: f64) -> Self {
        self.derivative_floor = floor;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config_builders() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50)
            .with_bounds(-0.99, 10.0);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.bounds, Some((-0.99, 10.0)));
    }
}
