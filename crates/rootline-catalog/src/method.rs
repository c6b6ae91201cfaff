//! Method selection and dispatch for catalogued equations.
//!
//! [`solve_equation`] runs exactly one solver on an [`EquationEntry`].
//! [`solve_equation_with_hook`] does the same and then hands the result to a
//! caller-supplied [`PostSolveHook`], which is where plotting or reporting
//! collaborators plug in.

use std::fmt;

use log::{debug, warn};
use rootline_math::solvers::{chord, newton, simple_iteration, Interval, SolverConfig, SolverResult};

use crate::equations::{EquationEntry, ScalarFn};
use crate::error::{CatalogError, CatalogResult};

/// Scalar root-finding method, keyed 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Chord (secant-bracketing) method.
    Chord,
    /// Newton's method.
    Newton,
    /// Simple (fixed-point) iteration.
    SimpleIteration,
}

impl Method {
    /// All methods, ordered by key.
    pub const ALL: [Method; 3] = [Method::Chord, Method::Newton, Method::SimpleIteration];

    /// Looks up a method by key.
    pub fn from_id(id: u8) -> CatalogResult<Self> {
        match id {
            1 => Ok(Self::Chord),
            2 => Ok(Self::Newton),
            3 => Ok(Self::SimpleIteration),
            _ => Err(CatalogError::UnknownMethod { id }),
        }
    }

    /// Catalog key of the method.
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::Chord => 1,
            Self::Newton => 2,
            Self::SimpleIteration => 3,
        }
    }

    /// Returns the name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Chord => "chord",
            Self::Newton => "Newton",
            Self::SimpleIteration => "simple iteration",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives the outcome of a successful solve.
pub trait PostSolveHook {
    /// Called once, after the solver returned a result.
    fn on_solved(&mut self, entry: &EquationEntry, interval: &Interval, result: &SolverResult);
}

impl<F> PostSolveHook for F
where
    F: FnMut(&EquationEntry, &Interval, &SolverResult),
{
    fn on_solved(&mut self, entry: &EquationEntry, interval: &Interval, result: &SolverResult) {
        self(entry, interval, result);
    }
}

/// Solves a catalogued equation with the chosen method.
///
/// # Errors
///
/// [`CatalogError::MissingFunction`] if the entry lacks a derivative or
/// fixed-point map the method needs, otherwise whatever the solver reports.
///
/// # Example
///
/// ```rust
/// use rootline_catalog::{equation, solve_equation, Method};
/// use rootline_math::solvers::SolverConfig;
///
/// let entry = equation(4).unwrap();
/// let interval = entry.interval().unwrap();
///
/// let result = solve_equation(entry, Method::Newton, interval, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn solve_equation(
    entry: &EquationEntry,
    method: Method,
    interval: Interval,
    config: &SolverConfig,
) -> CatalogResult<SolverResult> {
    debug!(
        "solving equation {} ({}) with the {} method on [{}, {}]",
        entry.id,
        entry.description,
        method,
        interval.low(),
        interval.high()
    );

    let result = match method {
        Method::Chord => chord(entry.f, interval, config),
        Method::Newton => {
            let df = require(entry, entry.df, "first derivative", method)?;
            let d2f = require(entry, entry.d2f, "second derivative", method)?;
            newton(entry.f, df, d2f, interval, config)
        }
        Method::SimpleIteration => {
            let phi = require(entry, entry.phi, "fixed-point map", method)?;
            let dphi = require(entry, entry.dphi, "fixed-point map derivative", method)?;
            simple_iteration(entry.f, phi, dphi, interval, config)
        }
    };

    result.map_err(|err| {
        warn!("equation {} with the {} method failed: {}", entry.id, method, err);
        CatalogError::from(err)
    })
}

/// Solves a catalogued equation and passes the result to `hook`.
///
/// The hook is not called when the solve fails.
pub fn solve_equation_with_hook<H>(
    entry: &EquationEntry,
    method: Method,
    interval: Interval,
    config: &SolverConfig,
    hook: &mut H,
) -> CatalogResult<SolverResult>
where
    H: PostSolveHook + ?Sized,
{
    let result = solve_equation(entry, method, interval, config)?;
    hook.on_solved(entry, &interval, &result);
    Ok(result)
}

fn require(
    entry: &EquationEntry,
    function: Option<ScalarFn>,
    name: &'static str,
    method: Method,
) -> CatalogResult<ScalarFn> {
    function.ok_or(CatalogError::MissingFunction {
        equation: entry.id,
        function: name,
        method: method.name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::{equation, equations};
    use approx::assert_relative_eq;
    use rootline_math::MathError;

    const ROOTS: [f64; 4] = [
        1.521_379_706_804_567_5,
        0.739_085_133_215_160_6,
        0.619_061_286_735_945_4,
        std::f64::consts::SQRT_2,
    ];

    #[test]
    fn test_method_ids_roundtrip() {
        for method in Method::ALL {
            assert_eq!(Method::from_id(method.id()).unwrap(), method);
        }
        assert_eq!(
            Method::from_id(4).unwrap_err(),
            CatalogError::UnknownMethod { id: 4 }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Method::SimpleIteration.to_string(), "simple iteration");
    }

    #[test]
    fn test_every_method_solves_every_equation() {
        let config = SolverConfig::default();
        for (entry, expected) in equations().iter().zip(ROOTS) {
            let interval = entry.interval().unwrap();
            for method in Method::ALL {
                let result = solve_equation(entry, method, interval, &config).unwrap();
                assert_relative_eq!(result.root, expected, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_missing_derivative() {
        let entry = EquationEntry {
            df: None,
            ..*equation(1).unwrap()
        };
        let interval = entry.interval().unwrap();

        let err =
            solve_equation(&entry, Method::Newton, interval, &SolverConfig::default()).unwrap_err();

        assert_eq!(
            err,
            CatalogError::MissingFunction {
                equation: 1,
                function: "first derivative",
                method: "Newton",
            }
        );
        assert!(err.is_invalid_argument());

        // Chord does not need it.
        assert!(solve_equation(&entry, Method::Chord, interval, &SolverConfig::default()).is_ok());
    }

    #[test]
    fn test_solver_errors_pass_through() {
        let entry = equation(2).unwrap();
        let interval = Interval::new(2.0, 3.0).unwrap();

        let err = solve_equation(entry, Method::Chord, interval, &SolverConfig::default())
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Solver(MathError::InvalidBracket { .. })
        ));
    }

    #[test]
    fn test_hook_receives_result() {
        let entry = equation(4).unwrap();
        let interval = entry.interval().unwrap();
        let mut seen = Vec::new();

        let result = solve_equation_with_hook(
            entry,
            Method::Chord,
            interval,
            &SolverConfig::default(),
            &mut |e: &EquationEntry, i: &Interval, r: &SolverResult| {
                seen.push((e.id, *i, *r));
            },
        )
        .unwrap();

        assert_eq!(seen, vec![(4, interval, result)]);
    }

    #[test]
    fn test_hook_skipped_on_failure() {
        let entry = equation(4).unwrap();
        let interval = entry.interval().unwrap();
        let mut calls = 0;

        let result = solve_equation_with_hook(
            entry,
            Method::Newton,
            interval,
            &SolverConfig::new(1e-15, 1),
            &mut |_: &EquationEntry, _: &Interval, _: &SolverResult| calls += 1,
        );

        assert!(result.is_err());
        assert_eq!(calls, 0);
    }
}
