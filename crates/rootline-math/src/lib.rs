//! # Rootline Math
//!
//! Iterative root-finding for nonlinear equations.
//!
//! This crate provides:
//!
//! - **Solvers**: Scalar root-finding on a bracket (Chord, Newton, Simple iteration)
//! - **Systems**: Newton's method for two equations in two unknowns
//! - **Linear Algebra**: Closed-form 2x2 solves used by the system solver
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Every solve takes an immutable configuration and
//!   returns a complete result or a typed error
//! - **Validated inputs**: Tolerance, iteration cap and bounds are checked
//!   before the first iteration
//! - **Caller-supplied calculus**: Derivatives are passed in as closures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod linear_algebra;
pub mod solvers;
pub mod systems;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::solve_cramer;
    pub use crate::solvers::{
        chord, newton, newton_raphson, simple_iteration, Interval, SolverConfig, SolverResult,
    };
    pub use crate::systems::{newton_system, IterationTrace, SystemSolution};
}

pub use error::{MathError, MathResult};
