//! Newton-Raphson root-finding with divergence guards.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// Convergence is declared on the residual: the iteration stops as soon
/// as `|f(x)| < config.tolerance`. Two divergence guards run each step:
///
/// - if `|f'(x)|` falls below `config.derivative_floor`, the step is
///   unreliable and [`MathError::DerivativeVanished`] is returned
/// - if the updated iterate leaves `config.bounds` (when set),
///   [`MathError::OutOfBounds`] is returned
///
/// Exhausting `config.max_iterations` returns
/// [`MathError::ConvergenceFailed`].
///
/// # Example
///
/// ```rust
/// use fundmetrics_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;
    let mut fx = f(x);

    for iteration in 0..config.max_iterations {
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if dfx.abs() < config.derivative_floor {
            debug!("newton: derivative {dfx:.3e} below floor at iteration {iteration}");
            return Err(MathError::DerivativeVanished { value: dfx });
        }

        x -= fx / dfx;

        if let Some((min, max)) = config.bounds {
            if x < min || x > max {
                debug!("newton: iterate {x} escaped [{min}, {max}] at iteration {iteration}");
                return Err(MathError::OutOfBounds { value: x, min, max });
            }
        }

        fx = f(x);
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fx.abs(),
    ))
}
