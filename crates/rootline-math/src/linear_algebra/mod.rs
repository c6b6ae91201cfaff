//! Linear algebra utilities.
//!
//! Closed-form solves for the 2x2 systems that arise when linearizing a
//! two-variable nonlinear system.

use nalgebra::{Matrix2, Vector2};

use crate::error::{MathError, MathResult};

/// Determinant magnitude below which a 2x2 matrix is treated as singular.
pub const SINGULARITY_THRESHOLD: f64 = 1e-12;

/// Solves `A * x = b` for a 2x2 matrix using Cramer's rule.
///
/// ```text
/// det = a11 * a22 - a12 * a21
/// x1  = (b1 * a22 - b2 * a12) / det
/// x2  = (a11 * b2 - a21 * b1) / det
/// ```
///
/// # Errors
///
/// Returns [`MathError::SingularJacobian`] if `|det|` is below
/// [`SINGULARITY_THRESHOLD`].
///
/// # Example
///
/// ```rust
/// use nalgebra::{Matrix2, Vector2};
/// use rootline_math::linear_algebra::solve_cramer;
///
/// let a = Matrix2::new(2.0, 1.0, 1.0, 3.0);
/// let b = Vector2::new(5.0, 5.0);
///
/// let x = solve_cramer(&a, &b).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 1.0).abs() < 1e-12);
/// ```
pub fn solve_cramer(a: &Matrix2<f64>, b: &Vector2<f64>) -> MathResult<Vector2<f64>> {
    let det = determinant(a);
    if det.abs() < SINGULARITY_THRESHOLD {
        return Err(MathError::SingularJacobian { determinant: det });
    }

    let x1 = (b[0] * a[(1, 1)] - b[1] * a[(0, 1)]) / det;
    let x2 = (a[(0, 0)] * b[1] - a[(1, 0)] * b[0]) / det;

    Ok(Vector2::new(x1, x2))
}

/// Determinant of a 2x2 matrix, `a11 * a22 - a12 * a21`.
#[must_use]
pub fn determinant(a: &Matrix2<f64>) -> f64 {
    a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)]
}
