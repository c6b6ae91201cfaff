//! Solvers for systems of two nonlinear equations in two unknowns.
//!
//! The system `F(x, y) = (f1(x, y), f2(x, y)) = 0` is supplied as a vector
//! function together with its 2x2 Jacobian:
//!
//! ```text
//! J = | df1/dx  df1/dy |
//!     | df2/dx  df2/dy |
//! ```
//!
//! # Example
//!
//! ```rust
//! use nalgebra::{Matrix2, Vector2};
//! use rootline_math::solvers::SolverConfig;
//! use rootline_math::systems::newton_system;
//!
//! // x^2 + y^2 = 2, x - y = 0
//! let functions = |p: &Vector2<f64>| Vector2::new(p.x * p.x + p.y * p.y - 2.0, p.x - p.y);
//! let jacobian = |p: &Vector2<f64>| Matrix2::new(2.0 * p.x, 2.0 * p.y, 1.0, -1.0);
//!
//! let solution = newton_system(functions, jacobian, Vector2::new(1.2, 0.8), &SolverConfig::default()).unwrap();
//! assert!((solution.point.x - 1.0).abs() < 1e-6);
//! assert_eq!(solution.trace.len() as u32, solution.iterations);
//! ```

mod newton;

pub use newton::{newton_system, RESIDUAL_GATE_FACTOR};

use nalgebra::Vector2;

/// Per-iteration step sizes of a system solve, in order.
///
/// Each entry is the Euclidean norm of the Newton step taken in that
/// iteration. Entries are only ever appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IterationTrace {
    errors: Vec<f64>,
}

impl IterationTrace {
    /// Creates an empty trace with room for `capacity` iterations.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            errors: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, error: f64) {
        self.errors.push(error);
    }

    /// Number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no iteration was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Step size of the final iteration.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.errors.last().copied()
    }

    /// Iterates over the recorded step sizes.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.errors.iter().copied()
    }

    /// The recorded step sizes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.errors
    }
}

/// Result of a converged system solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSolution {
    /// The solution `(x, y)`.
    pub point: Vector2<f64>,
    /// `F` evaluated at the solution.
    pub residual: Vector2<f64>,
    /// Number of iterations performed.
    pub iterations: u32,
    /// Step size of every iteration.
    pub trace: IterationTrace,
}
