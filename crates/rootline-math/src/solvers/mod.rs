//! Scalar root-finding algorithms.
//!
//! This module provides numerical solvers for a single equation `f(x) = 0`
//! on a bracketing interval:
//!
//! - [`chord`]: Secant line through the bracket endpoints, bracket kept
//! - [`newton`]: Tangent steps from the endpoint satisfying Fourier's condition
//! - [`simple_iteration`]: Fixed-point iteration `x = phi(x)` from the midpoint
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Requires | Zero endpoint |
//! |--------|-------|----------|---------------|
//! | Chord | Superlinear | Bracket | Returned immediately |
//! | Newton | Quadratic | `f'`, `f''`, strict bracket | Rejected |
//! | Simple iteration | Linear | `phi`, `phi'` with `max|phi'| < 1` | Returned immediately |
//!
//! # Example
//!
//! ```rust
//! use rootline_math::solvers::{chord, Interval, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let interval = Interval::new(1.0, 2.0).unwrap();
//!
//! let result = chord(f, interval, &SolverConfig::default()).unwrap();
//! assert!(result.residual.abs() < 1e-6);
//! ```

mod chord;
mod interval;
mod newton;
mod simple_iteration;

pub use chord::chord;
pub use interval::Interval;
pub use newton::{newton, newton_raphson};
pub use simple_iteration::{simple_iteration, CONTRACTION_SAMPLES};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
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

    /// Checks that the tolerance is finite and positive and the iteration
    /// cap is non-zero.
    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MathError::invalid_argument(format!(
                "tolerance must be finite and positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_argument(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Result of a scalar root-finding solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Function value at the root.
    pub residual: f64,
    /// Number of iterations used.
    pub iterations: u32,
}

impl SolverResult {
    /// Result for an endpoint that is already an exact root.
    pub(crate) fn at_endpoint(root: f64, residual: f64) -> Self {
        Self {
            root,
            residual,
            iterations: 0,
        }
    }
}

/// Evaluates `f` at both ends of the interval.
pub(crate) fn endpoint_values<F>(f: &F, interval: &Interval) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    (f(interval.low()), f(interval.high()))
}

/// Returns true if both values are non-zero and share a sign.
///
/// Compares signs directly, so values whose product would underflow to
/// zero are still classified correctly. NaN is never same-signed.
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    x != 0.0 && y != 0.0 && x.signum() == y.signum()
}

/// Returns true if both values are non-zero and differ in sign.
pub(crate) fn opposite_signs(x: f64, y: f64) -> bool {
    x != 0.0 && y != 0.0 && x.signum() == -y.signum()
}

/// Validates the endpoint values of a bracket.
///
/// A NaN at either end is always rejected. With `strict`, an exact zero at
/// an endpoint is rejected too; otherwise it counts as a sign change.
pub(crate) fn check_bracket(
    interval: &Interval,
    fa: f64,
    fb: f64,
    strict: bool,
) -> MathResult<()> {
    let valid = if strict {
        opposite_signs(fa, fb)
    } else {
        !fa.is_nan() && !fb.is_nan() && !same_sign(fa, fb)
    };

    if valid {
        Ok(())
    } else {
        Err(MathError::InvalidBracket {
            a: interval.low(),
            b: interval.high(),
            fa,
            fb,
        })
    }
}

/// Returns an exact-zero endpoint, preferring the lower one.
pub(crate) fn zero_endpoint(interval: &Interval, fa: f64, fb: f64) -> Option<SolverResult> {
    if fa == 0.0 {
        Some(SolverResult::at_endpoint(interval.low(), fa))
    } else if fb == 0.0 {
        Some(SolverResult::at_endpoint(interval.high(), fb))
    } else {
        None
    }
}
