//! Catalog of scalar equations.
//!
//! Each entry carries `f` with the derivatives Newton's method needs and a
//! fixed-point rearrangement `x = phi(x)` for simple iteration. Entries are
//! looked up by key 1-4.
//!
//! | Key | Equation | phi(x) | Bracket |
//! |-----|----------|--------|---------|
//! | 1 | x³ − x − 2 = 0 | ∛(x + 2) | [1, 2] |
//! | 2 | cos x − x = 0 | cos x | [0, 1] |
//! | 3 | eˣ − 3x = 0 | eˣ / 3 | [0, 1] |
//! | 4 | x² − 2 = 0 | (x + 2/x) / 2 | [1, 2] |

use rootline_math::solvers::Interval;

use crate::error::{CatalogError, CatalogResult};

/// A real function of one real variable.
pub type ScalarFn = fn(f64) -> f64;

/// A catalogued scalar equation `f(x) = 0`.
#[derive(Debug, Clone, Copy)]
pub struct EquationEntry {
    /// Catalog key.
    pub id: u8,
    /// Human-readable form of the equation.
    pub description: &'static str,
    /// The function whose root is sought.
    pub f: ScalarFn,
    /// First derivative, where applicable.
    pub df: Option<ScalarFn>,
    /// Second derivative, where applicable.
    pub d2f: Option<ScalarFn>,
    /// Fixed-point map with `phi(x) = x` at the root, where applicable.
    pub phi: Option<ScalarFn>,
    /// Derivative of the fixed-point map, where applicable.
    pub dphi: Option<ScalarFn>,
    /// A bracket known to contain exactly one root, as `(low, high)`.
    pub bracket: (f64, f64),
}

impl EquationEntry {
    /// The suggested bracket as an [`Interval`].
    pub fn interval(&self) -> CatalogResult<Interval> {
        Ok(Interval::new(self.bracket.0, self.bracket.1)?)
    }

    /// Evaluates `f` at `n` evenly spaced points of the interval.
    ///
    /// Intended for plotting collaborators; endpoints are included.
    #[must_use]
    pub fn sample(&self, interval: &Interval, n: usize) -> Vec<(f64, f64)> {
        interval
            .linspace(n)
            .into_iter()
            .map(|x| (x, (self.f)(x)))
            .collect()
    }
}

static EQUATIONS: [EquationEntry; 4] = [
    EquationEntry {
        id: 1,
        description: "x^3 - x - 2 = 0",
        f: cubic,
        df: Some(cubic_prime),
        d2f: Some(cubic_second),
        phi: Some(cubic_phi),
        dphi: Some(cubic_phi_prime),
        bracket: (1.0, 2.0),
    },
    EquationEntry {
        id: 2,
        description: "cos(x) - x = 0",
        f: cosine,
        df: Some(cosine_prime),
        d2f: Some(cosine_second),
        phi: Some(f64::cos),
        dphi: Some(cosine_phi_prime),
        bracket: (0.0, 1.0),
    },
    EquationEntry {
        id: 3,
        description: "e^x - 3x = 0",
        f: exponential,
        df: Some(exponential_prime),
        d2f: Some(f64::exp),
        phi: Some(exponential_phi),
        dphi: Some(exponential_phi),
        bracket: (0.0, 1.0),
    },
    EquationEntry {
        id: 4,
        description: "x^2 - 2 = 0",
        f: square,
        df: Some(square_prime),
        d2f: Some(square_second),
        phi: Some(square_phi),
        dphi: Some(square_phi_prime),
        bracket: (1.0, 2.0),
    },
];

/// All catalogued equations, ordered by key.
#[must_use]
pub fn equations() -> &'static [EquationEntry] {
    &EQUATIONS
}

/// Looks up an equation by key.
pub fn equation(id: u8) -> CatalogResult<&'static EquationEntry> {
    EQUATIONS
        .iter()
        .find(|entry| entry.id == id)
        .ok_or(CatalogError::UnknownEquation {
            id,
            count: EQUATIONS.len(),
        })
}

// x^3 - x - 2

fn cubic(x: f64) -> f64 {
    x * x * x - x - 2.0
}

fn cubic_prime(x: f64) -> f64 {
    3.0 * x * x - 1.0
}

fn cubic_second(x: f64) -> f64 {
    6.0 * x
}

fn cubic_phi(x: f64) -> f64 {
    (x + 2.0).cbrt()
}

fn cubic_phi_prime(x: f64) -> f64 {
    1.0 / (3.0 * (x + 2.0).cbrt().powi(2))
}

// cos(x) - x

fn cosine(x: f64) -> f64 {
    x.cos() - x
}

fn cosine_prime(x: f64) -> f64 {
    -x.sin() - 1.0
}

fn cosine_second(x: f64) -> f64 {
    -x.cos()
}

fn cosine_phi_prime(x: f64) -> f64 {
    -x.sin()
}

// e^x - 3x

fn exponential(x: f64) -> f64 {
    x.exp() - 3.0 * x
}

fn exponential_prime(x: f64) -> f64 {
    x.exp() - 3.0
}

fn exponential_phi(x: f64) -> f64 {
    x.exp() / 3.0
}

// x^2 - 2

fn square(x: f64) -> f64 {
    x * x - 2.0
}

fn square_prime(x: f64) -> f64 {
    2.0 * x
}

fn square_second(_: f64) -> f64 {
    2.0
}

fn square_phi(x: f64) -> f64 {
    (x + 2.0 / x) / 2.0
}

fn square_phi_prime(x: f64) -> f64 {
    (1.0 - 2.0 / (x * x)) / 2.0
}
