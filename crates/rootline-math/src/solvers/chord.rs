//! Chord (secant-bracketing) root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{
    check_bracket, endpoint_values, opposite_signs, zero_endpoint, Interval, SolverConfig,
    SolverResult,
};

/// Chord root-finding algorithm.
///
/// Draws the secant line through `(a, f(a))` and `(b, f(b))` and takes its
/// zero as the next estimate:
/// `x0 = a - (b - a) / (f(b) - f(a)) * f(a)`
///
/// The bracket is then shrunk to whichever side still holds a sign change:
/// `[a, x0]` if `f(x0) * f(a) < 0`, otherwise `[x0, b]`.
///
/// Requires: `f(a)` and `f(b)` not of the same sign, and neither NaN. An
/// endpoint with `f == 0` is returned at once with zero iterations.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `interval` - The bracketing interval
/// * `config` - Solver configuration
///
/// # Returns
///
/// The first secant point with `|f(x0)| < tolerance`. `iterations` is the
/// zero-based index of the secant step that produced it.
///
/// # Example
///
/// ```rust
/// use rootline_math::solvers::{chord, Interval, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let interval = Interval::new(1.0, 2.0).unwrap();
///
/// let result = chord(f, interval, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn chord<F>(f: F, interval: Interval, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let (f_lo, f_hi) = endpoint_values(&f, &interval);

    check_bracket(&interval, f_lo, f_hi, false)?;

    if let Some(result) = zero_endpoint(&interval, f_lo, f_hi) {
        debug!("chord: endpoint {} is an exact root", result.root);
        return Ok(result);
    }

    let mut a = interval.low();
    let mut b = interval.high();
    let mut f_a = f_lo;
    let mut f_b = f_hi;

    for iteration in 0..config.max_iterations {
        // A zero or overflowed denominator gives a step with no progress
        let denom = f_b - f_a;
        if denom == 0.0 || !denom.is_finite() {
            return Err(MathError::DegenerateStep {
                point: a,
                denominator: denom,
            });
        }

        let x0 = a - (b - a) / denom * f_a;
        if !x0.is_finite() {
            return Err(MathError::ArithmeticDivergence {
                iteration,
                value: x0,
            });
        }

        let f_x0 = f(x0);
        trace!("chord: iteration {iteration}, bracket [{a}, {b}], x0 = {x0}, f(x0) = {f_x0:e}");

        // Check for convergence
        if f_x0.abs() < config.tolerance {
            debug!("chord: converged to {x0} at iteration {iteration}");
            return Ok(SolverResult {
                root: x0,
                residual: f_x0,
                iterations: iteration,
            });
        }

        // Update bracket
        if opposite_signs(f_x0, f_a) {
            b = x0;
            f_b = f_x0;
        } else {
            a = x0;
            f_a = f_x0;
        }
    }

    debug!("chord: no convergence after {} iterations", config.max_iterations);
    Err(MathError::non_convergence(
        config.max_iterations,
        f_a.abs().min(f_b.abs()),
    ))
}
