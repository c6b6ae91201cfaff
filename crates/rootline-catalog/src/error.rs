//! Catalog error types.

use rootline_math::MathError;
use thiserror::Error;

/// Catalog operation result type.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// No equation is registered under the key.
    #[error("Unknown equation: {id} (expected 1-{count})")]
    UnknownEquation {
        /// The requested key.
        id: u8,
        /// Number of registered equations.
        count: usize,
    },

    /// No system is registered under the key.
    #[error("Unknown system: {id} (expected 1-{count})")]
    UnknownSystem {
        /// The requested key.
        id: u8,
        /// Number of registered systems.
        count: usize,
    },

    /// No method is registered under the key.
    #[error("Unknown method: {id} (expected 1-3)")]
    UnknownMethod {
        /// The requested key.
        id: u8,
    },

    /// The entry lacks a function the chosen method needs.
    #[error("Equation {equation} has no {function} for the {method} method")]
    MissingFunction {
        /// Equation key.
        equation: u8,
        /// Name of the missing function.
        function: &'static str,
        /// Name of the method that needed it.
        method: &'static str,
    },

    /// The solver itself failed.
    #[error("Solver error: {0}")]
    Solver(#[from] MathError),
}

impl CatalogError {
    /// Returns true for a caller mistake: a bad key, a missing function, or
    /// an argument the solver rejected as invalid.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::Solver(err) => err.is_invalid_argument(),
            _ => true,
        }
    }
}
