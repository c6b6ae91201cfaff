//! Newton root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{
    check_bracket, endpoint_values, same_sign, Interval, SolverConfig, SolverResult,
};

/// Newton's method on a bracketing interval.
///
/// Picks the starting point by Fourier's condition: the endpoint `x` with
/// `f(x) * f''(x) > 0`, checking `a` first, falling back to `b` when
/// neither qualifies. From that side the tangent iterates approach the
/// root monotonically. The iteration itself is [`newton_raphson`].
///
/// Requires a strict sign change: `f(a)` and `f(b)` non-zero and of opposite
/// signs. Unlike the chord and simple-iteration methods, an endpoint with
/// `f == 0` is rejected rather than returned, since it leaves no side to
/// start from.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The first derivative of the function
/// * `d2f` - The second derivative of the function
/// * `interval` - The bracketing interval
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use rootline_math::solvers::{newton, Interval, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
/// let d2f = |_: f64| 2.0;
/// let interval = Interval::new(1.0, 2.0).unwrap();
///
/// let result = newton(f, df, d2f, interval, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn newton<F, DF, D2F>(
    f: F,
    df: DF,
    d2f: D2F,
    interval: Interval,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
    D2F: Fn(f64) -> f64,
{
    config.validate()?;

    let (f_lo, f_hi) = endpoint_values(&f, &interval);

    // Strict sign change, no zero-endpoint shortcut
    check_bracket(&interval, f_lo, f_hi, true)?;

    let start = if same_sign(f_lo, d2f(interval.low())) {
        interval.low()
    } else {
        interval.high()
    };
    debug!("newton: starting from {start}");

    newton_raphson(f, df, start, config)
}

/// Newton-Raphson iteration from a given starting point.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// and stops when `|x_{n+1} - x_n| < tolerance`. `iterations` counts the
/// steps taken, starting at 1.
///
/// # Errors
///
/// * [`MathError::DegenerateStep`] if `f'` is exactly zero at an iterate
/// * [`MathError::ArithmeticDivergence`] if an iterate is NaN or infinite
/// * [`MathError::NonConvergence`] if the iteration cap is exhausted
///
/// # Example
///
/// ```rust
/// use rootline_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x * x - 27.0;
/// let df = |x: f64| 3.0 * x * x;
///
/// let result = newton_raphson(f, df, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 3.0).abs() < 1e-6);
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
    config.validate()?;

    if !initial_guess.is_finite() {
        return Err(MathError::invalid_argument(format!(
            "initial guess must be finite, got {initial_guess}"
        )));
    }

    let mut x = initial_guess;

    for iteration in 1..=config.max_iterations {
        let fx = f(x);
        let dfx = df(x);

        // Check for zero derivative
        if dfx == 0.0 {
            return Err(MathError::DegenerateStep {
                point: x,
                denominator: dfx,
            });
        }

        // Newton step
        let x_new = x - fx / dfx;
        if !x_new.is_finite() {
            return Err(MathError::ArithmeticDivergence {
                iteration,
                value: x_new,
            });
        }
        trace!("newton: iteration {iteration}, x = {x_new}, step = {:e}", x_new - x);

        // Check for step convergence
        if (x_new - x).abs() < config.tolerance {
            debug!("newton: converged to {x_new} after {iteration} iterations");
            return Ok(SolverResult {
                root: x_new,
                residual: f(x_new),
                iterations: iteration,
            });
        }

        x = x_new;
    }

    debug!("newton: no convergence after {} iterations", config.max_iterations);
    Err(MathError::non_convergence(
        config.max_iterations,
        f(x).abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let d2f = |_: f64| 2.0;
        let interval = Interval::new(1.0, 2.0).unwrap();

        let result = newton(f, df, d2f, interval, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.residual.abs() < 1e-6);
        assert!(result.iterations >= 1);
        assert!(result.iterations < 10); // Should converge quickly
    }

    #[test]
    fn test_cube_root() {
        // Find cube root of 27 (should be 3)
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 2.0, &SolverConfig::new(1e-12, 100)).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_fourier_start_picks_lower_endpoint() {
        // f is convex and f(0) > 0, so the iteration starts at a = 0.
        let f = |x: f64| (-x).exp() - 0.5;
        let df = |x: f64| -(-x).exp();
        let d2f = |x: f64| (-x).exp();
        let interval = Interval::new(0.0, 3.0).unwrap();

        let result = newton(f, df, d2f, interval, &SolverConfig::new(1e-12, 50)).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::LN_2, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;
        let d2f = |_: f64| 2.0;
        let interval = Interval::new(0.0, 1.0).unwrap();

        let result = newton(f, df, d2f, interval, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_zero_endpoint_is_not_a_shortcut() {
        let f = |x: f64| x;
        let df = |_: f64| 1.0;
        let d2f = |_: f64| 0.0;
        let interval = Interval::new(0.0, 2.0).unwrap();

        let result = newton(f, df, d2f, interval, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_zero_derivative_error() {
        // f(x) = x^3 seeded at 0 has zero derivative
        let f = |x: f64| x * x * x;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default());

        assert_eq!(
            result,
            Err(MathError::DegenerateStep {
                point: 0.0,
                denominator: 0.0
            })
        );
    }

    #[test]
    fn test_convergence_fail() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let d2f = |_: f64| 2.0;
        let interval = Interval::new(1.0, 2.0).unwrap();

        let result = newton(f, df, d2f, interval, &SolverConfig::new(1e-15, 1));

        assert!(matches!(
            result,
            Err(MathError::NonConvergence { iterations: 1, .. })
        ));
    }

    #[test]
    fn test_non_finite_seed_rejected() {
        let f = |x: f64| x;
        let df = |_: f64| 1.0;

        let result = newton_raphson(f, df, f64::NAN, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidArgument { .. })));
    }

    #[test]
    fn test_tiny_scale_sign_change_accepted() {
        // f(a) * f(b) underflows to zero, yet the bracket is valid
        let f = |x: f64| 1e-170 * (x * x - 2.0);
        let df = |x: f64| 2e-170 * x;
        let d2f = |_: f64| 2e-170;
        let interval = Interval::new(1.0, 2.0).unwrap();

        let result = newton(f, df, d2f, interval, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_nan_endpoint_rejected() {
        let f = |x: f64| x.sqrt() - 0.5;
        let df = |x: f64| 0.5 / x.sqrt();
        let d2f = |x: f64| -0.25 / (x * x.sqrt());
        let interval = Interval::new(-1.0, 1.0).unwrap();

        let result = newton(f, df, d2f, interval, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { fa, .. }) if fa.is_nan()));
    }

    #[test]
    fn test_zero_derivative_at_start_endpoint() {
        // x^3 - 3x + 1 on [0, 1]: f''(0) = 0 fails Fourier's condition at a,
        // so the iteration starts at b = 1 where f'(1) = 0.
        let f = |x: f64| x * x * x - 3.0 * x + 1.0;
        let df = |x: f64| 3.0 * x * x - 3.0;
        let d2f = |x: f64| 6.0 * x;
        let interval = Interval::new(0.0, 1.0).unwrap();

        let result = newton(f, df, d2f, interval, &SolverConfig::default());

        assert_eq!(
            result,
            Err(MathError::DegenerateStep {
                point: 1.0,
                denominator: 0.0
            })
        );
    }

    #[test]
    fn test_overflowing_step() {
        let f = |_: f64| 1e300;
        let df = |_: f64| 1e-300;

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default());

        assert_eq!(
            result,
            Err(MathError::ArithmeticDivergence {
                iteration: 1,
                value: f64::NEG_INFINITY,
            })
        );
    }
}
