//! Error types for root-finding operations.

use thiserror::Error;

/// A specialized Result type for root-finding operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while solving an equation or system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Invalid input parameter (tolerance, iteration cap, bounds, seed).
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the invalid input.
        reason: String,
    },

    /// The interval does not bracket exactly one sign change.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} do not change sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// The fixed-point map does not contract on the interval.
    #[error("Sufficient convergence condition not met: max|phi'(x)| = {max_derivative:.4} >= 1")]
    NotContractive {
        /// Largest sampled `|phi'(x)|`.
        max_derivative: f64,
    },

    /// Jacobian determinant is below the near-singular threshold.
    #[error("Singular Jacobian: determinant {determinant:.2e} is too close to zero")]
    SingularJacobian {
        /// The offending determinant.
        determinant: f64,
    },

    /// Division by a zero denominator in a scalar update.
    #[error("Degenerate step at x = {point}: denominator {denominator:.2e}")]
    DegenerateStep {
        /// Point at which the update was attempted.
        point: f64,
        /// The zero (or near-zero) denominator.
        denominator: f64,
    },

    /// An iterate became NaN or infinite.
    #[error("Arithmetic divergence at iteration {iteration}: iterate is {value}")]
    ArithmeticDivergence {
        /// Iteration at which the non-finite value appeared.
        iteration: u32,
        /// The non-finite value.
        value: f64,
    },

    /// Iteration cap exhausted, or the final residual check failed.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    NonConvergence {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual magnitude.
        residual: f64,
    },
}

impl MathError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(iterations: u32, residual: f64) -> Self {
        Self::NonConvergence {
            iterations,
            residual,
        }
    }

    /// Returns true for configuration errors detected before iterating.
    ///
    /// A non-contractive fixed-point map counts as one: the caller chose
    /// a `phi` that is not guaranteed to converge on the interval.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::NotContractive { .. }
        )
    }
}
