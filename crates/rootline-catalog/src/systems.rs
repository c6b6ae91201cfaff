//! Catalog of two-equation nonlinear systems.

use log::debug;
use nalgebra::{Matrix2, Vector2};
use rootline_math::solvers::SolverConfig;
use rootline_math::systems::{newton_system, SystemSolution};

use crate::error::{CatalogError, CatalogResult};

/// Evaluates `(f1, f2)` at a point.
pub type VectorFn = fn(&Vector2<f64>) -> Vector2<f64>;

/// Evaluates the 2x2 Jacobian at a point.
pub type JacobianFn = fn(&Vector2<f64>) -> Matrix2<f64>;

/// A catalogued system `F(x, y) = 0`.
#[derive(Debug, Clone, Copy)]
pub struct SystemEntry {
    /// Catalog key.
    pub id: u8,
    /// Human-readable form of the system.
    pub description: &'static str,
    /// The vector function `F`.
    pub functions: VectorFn,
    /// Jacobian of `F`.
    pub jacobian: JacobianFn,
    /// A starting point from which Newton's method converges.
    pub seed: (f64, f64),
}

impl SystemEntry {
    /// The suggested starting point as a vector.
    #[must_use]
    pub fn seed_point(&self) -> Vector2<f64> {
        Vector2::new(self.seed.0, self.seed.1)
    }

    /// Solves the system with Newton's method from `start`.
    pub fn solve(
        &self,
        start: Vector2<f64>,
        config: &SolverConfig,
    ) -> CatalogResult<SystemSolution> {
        debug!(
            "solving system {} ({}) from ({}, {})",
            self.id, self.description, start.x, start.y
        );
        Ok(newton_system(self.functions, self.jacobian, start, config)?)
    }
}

static SYSTEMS: [SystemEntry; 4] = [
    SystemEntry {
        id: 1,
        description: "x^2 + y^2 = 2; x - y = 0",
        functions: circle_line,
        jacobian: circle_line_jacobian,
        seed: (1.2, 0.8),
    },
    SystemEntry {
        id: 2,
        description: "sin(x) + y = 2; x + cos(y) = 1",
        functions: sine_cosine,
        jacobian: sine_cosine_jacobian,
        seed: (0.5, 1.5),
    },
    SystemEntry {
        id: 3,
        description: "x^3 - y = 0; x^2 + y^2 = 4",
        functions: cubic_circle,
        jacobian: cubic_circle_jacobian,
        seed: (1.0, 1.0),
    },
    SystemEntry {
        id: 4,
        description: "sin(y - 1) + x = 1.3; y - sin(x + 1) = 0.8",
        functions: shifted_sines,
        jacobian: shifted_sines_jacobian,
        seed: (0.5, 1.5),
    },
];

/// All catalogued systems, ordered by key.
#[must_use]
pub fn systems() -> &'static [SystemEntry] {
    &SYSTEMS
}

/// Looks up a system by key.
pub fn system(id: u8) -> CatalogResult<&'static SystemEntry> {
    SYSTEMS
        .iter()
        .find(|entry| entry.id == id)
        .ok_or(CatalogError::UnknownSystem {
            id,
            count: SYSTEMS.len(),
        })
}

fn circle_line(p: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(p.x * p.x + p.y * p.y - 2.0, p.x - p.y)
}

fn circle_line_jacobian(p: &Vector2<f64>) -> Matrix2<f64> {
    Matrix2::new(2.0 * p.x, 2.0 * p.y, 1.0, -1.0)
}

fn sine_cosine(p: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(p.x.sin() + p.y - 2.0, p.x + p.y.cos() - 1.0)
}

fn sine_cosine_jacobian(p: &Vector2<f64>) -> Matrix2<f64> {
    Matrix2::new(p.x.cos(), 1.0, 1.0, -p.y.sin())
}

fn cubic_circle(p: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(p.x.powi(3) - p.y, p.x * p.x + p.y * p.y - 4.0)
}

fn cubic_circle_jacobian(p: &Vector2<f64>) -> Matrix2<f64> {
    Matrix2::new(3.0 * p.x * p.x, -1.0, 2.0 * p.x, 2.0 * p.y)
}

fn shifted_sines(p: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(
        (p.y - 1.0).sin() + p.x - 1.3,
        p.y - (p.x + 1.0).sin() - 0.8,
    )
}

fn shifted_sines_jacobian(p: &Vector2<f64>) -> Matrix2<f64> {
    Matrix2::new(1.0, (p.y - 1.0).cos(), -(p.x + 1.0).cos(), 1.0)
}
