//! Simple-iteration (fixed-point) root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{
    check_bracket, endpoint_values, zero_endpoint, Interval, SolverConfig, SolverResult,
};

/// Number of points at which `phi'` is sampled for the contraction check.
pub const CONTRACTION_SAMPLES: usize = 100;

/// Simple-iteration root-finding algorithm.
///
/// Rewrites `f(x) = 0` as `x = phi(x)` and iterates
/// `x_{n+1} = phi(x_n)` from the interval midpoint until
/// `|x_{n+1} - x_n| < tolerance`.
///
/// Before iterating, `|phi'|` is sampled at [`CONTRACTION_SAMPLES`] evenly
/// spaced points of the interval. The sufficient convergence condition is
/// `max |phi'(x)| < 1`.
///
/// # Arguments
///
/// * `f` - The original function, used for the bracket check and the residual
/// * `phi` - The fixed-point map
/// * `dphi` - The derivative of the fixed-point map
/// * `interval` - The bracketing interval
/// * `config` - Solver configuration
///
/// # Errors
///
/// * [`MathError::NotContractive`] if the sampled `max |phi'|` is `>= 1`
/// * [`MathError::InvalidBracket`] if `f(a)` and `f(b)` share a sign or either is NaN
/// * [`MathError::ArithmeticDivergence`] if an iterate is NaN or infinite
/// * [`MathError::NonConvergence`] if the iteration cap is exhausted
///
/// # Example
///
/// ```rust
/// use rootline_math::solvers::{simple_iteration, Interval, SolverConfig};
///
/// // x = cos(x)
/// let f = |x: f64| x.cos() - x;
/// let phi = |x: f64| x.cos();
/// let dphi = |x: f64| -x.sin();
/// let interval = Interval::new(0.0, 1.0).unwrap();
///
/// let result = simple_iteration(f, phi, dphi, interval, &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.739085).abs() < 1e-5);
/// ```
pub fn simple_iteration<F, P, DP>(
    f: F,
    phi: P,
    dphi: DP,
    interval: Interval,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    P: Fn(f64) -> f64,
    DP: Fn(f64) -> f64,
{
    config.validate()?;
    check_contraction(&dphi, &interval)?;

    let (f_lo, f_hi) = endpoint_values(&f, &interval);

    check_bracket(&interval, f_lo, f_hi, false)?;

    if let Some(result) = zero_endpoint(&interval, f_lo, f_hi) {
        debug!("simple iteration: endpoint {} is an exact root", result.root);
        return Ok(result);
    }

    let mut x = interval.midpoint();

    for iteration in 1..=config.max_iterations {
        let x_new = phi(x);
        if !x_new.is_finite() {
            return Err(MathError::ArithmeticDivergence {
                iteration,
                value: x_new,
            });
        }
        trace!("simple iteration: iteration {iteration}, x = {x_new}");

        if (x_new - x).abs() < config.tolerance {
            debug!("simple iteration: converged to {x_new} after {iteration} iterations");
            return Ok(SolverResult {
                root: x_new,
                residual: f(x_new),
                iterations: iteration,
            });
        }

        x = x_new;
    }

    debug!(
        "simple iteration: no convergence after {} iterations",
        config.max_iterations
    );
    Err(MathError::non_convergence(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Checks `max |phi'(x)| < 1` over the sampled interval.
fn check_contraction<DP>(dphi: &DP, interval: &Interval) -> MathResult<()>
where
    DP: Fn(f64) -> f64,
{
    // NaN samples poison the maximum so they cannot pass the check
    let max_derivative = interval
        .linspace(CONTRACTION_SAMPLES)
        .into_iter()
        .map(|x| dphi(x).abs())
        .fold(0.0_f64, |max, d| if d.is_nan() || d > max { d } else { max });

    if max_derivative.is_nan() || max_derivative >= 1.0 {
        debug!(
            "simple iteration: max|phi'| = {max_derivative} on [{}, {}]",
            interval.low(),
            interval.high()
        );
        return Err(MathError::NotContractive { max_derivative });
    }
    Ok(())
}
