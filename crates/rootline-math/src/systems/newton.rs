//! Newton's method for a 2x2 nonlinear system.

use log::{debug, trace};
use nalgebra::{Matrix2, Vector2};

use crate::error::{MathError, MathResult};
use crate::linear_algebra::solve_cramer;
use crate::solvers::SolverConfig;
use crate::systems::{IterationTrace, SystemSolution};

/// Multiple of the tolerance that each final residual component must stay within.
pub const RESIDUAL_GATE_FACTOR: f64 = 100.0;

/// Newton's method for two equations in two unknowns.
///
/// Each iteration solves `J * delta = -F` at the current point with
/// Cramer's rule and moves to `point + delta`. The Euclidean norm of
/// `delta` is recorded in the trace.
///
/// Termination happens in two stages:
///
/// 1. The loop breaks once `|delta| < tolerance`, or silently stops when
///    `max_iterations` is used up.
/// 2. `F` is evaluated at the final point and the solve is rejected if
///    `|f1|` or `|f2|` exceeds `RESIDUAL_GATE_FACTOR * tolerance`.
///
/// A small step does not by itself prove a root: the gate rejects iterates
/// that stagnate away from one.
///
/// # Arguments
///
/// * `functions` - Evaluates `(f1, f2)` at a point
/// * `jacobian` - Evaluates the 2x2 Jacobian at a point
/// * `start` - Initial approximation `(x0, y0)`
/// * `config` - Solver configuration
///
/// # Errors
///
/// * [`MathError::SingularJacobian`] if `|det J| < 1e-12` at an iterate
/// * [`MathError::ArithmeticDivergence`] if an iterate is NaN or infinite
/// * [`MathError::NonConvergence`] if the final residual check fails
pub fn newton_system<F, J>(
    functions: F,
    jacobian: J,
    start: Vector2<f64>,
    config: &SolverConfig,
) -> MathResult<SystemSolution>
where
    F: Fn(&Vector2<f64>) -> Vector2<f64>,
    J: Fn(&Vector2<f64>) -> Matrix2<f64>,
{
    config.validate()?;

    if !start.iter().all(|v| v.is_finite()) {
        return Err(MathError::invalid_argument(format!(
            "starting point must be finite, got ({}, {})",
            start.x, start.y
        )));
    }

    let mut point = start;
    // Grows with the iterations actually run, not the cap
    let mut trace = IterationTrace::default();

    for iteration in 1..=config.max_iterations {
        let f = functions(&point);
        let j = jacobian(&point);

        let delta = solve_cramer(&j, &(-f))?;
        let next = point + delta;

        if let Some(value) = next.iter().copied().find(|v| !v.is_finite()) {
            return Err(MathError::ArithmeticDivergence { iteration, value });
        }

        let error = delta.norm();
        trace.push(error);
        trace!(
            "newton system: iteration {iteration}, x = {:.6}, y = {:.6}, error = {error:.2e}",
            next.x,
            next.y
        );

        point = next;

        if error < config.tolerance {
            break;
        }
    }

    let iterations = trace.len() as u32;
    let residual = functions(&point);
    let gate = RESIDUAL_GATE_FACTOR * config.tolerance;

    // Written as "not within" so a NaN residual is rejected too
    if !(residual.x.abs() <= gate && residual.y.abs() <= gate) {
        debug!(
            "newton system: residual ({:e}, {:e}) exceeds {gate:e} after {iterations} iterations",
            residual.x, residual.y
        );
        return Err(MathError::non_convergence(iterations, residual.amax()));
    }

    debug!(
        "newton system: converged to ({}, {}) after {iterations} iterations",
        point.x, point.y
    );
    Ok(SystemSolution {
        point,
        residual,
        iterations,
        trace,
    })
}
