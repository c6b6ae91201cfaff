//! # Rootline Catalog
//!
//! Named equations and systems for the Rootline solvers.
//!
//! This crate provides:
//!
//! - **Equations**: Four scalar equations with derivatives, fixed-point maps
//!   and a root-isolating bracket
//! - **Systems**: Four 2x2 nonlinear systems with Jacobians and seed points
//! - **Methods**: Selection of chord, Newton or simple iteration by key, with
//!   an optional hook run after a successful solve
//!
//! ## Example
//!
//! ```rust
//! use rootline_catalog::prelude::*;
//! use rootline_math::solvers::SolverConfig;
//!
//! let entry = equation(2).unwrap();
//! let method = Method::from_id(1).unwrap();
//! let result = solve_equation(entry, method, entry.interval().unwrap(), &SolverConfig::default())
//!     .unwrap();
//! assert!((result.root - 0.739_085).abs() < 1e-5);
//!
//! let sys = system(1).unwrap();
//! let solution = sys.solve(sys.seed_point(), &SolverConfig::default()).unwrap();
//! assert!((solution.point.x - 1.0).abs() < 1e-5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod equations;
pub mod error;
pub mod method;
pub mod systems;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::equations::{equation, equations, EquationEntry};
    pub use crate::error::{CatalogError, CatalogResult};
    pub use crate::method::{solve_equation, solve_equation_with_hook, Method, PostSolveHook};
    pub use crate::systems::{system, systems, SystemEntry};
}

pub use equations::{equation, equations, EquationEntry, ScalarFn};
pub use error::{CatalogError, CatalogResult};
pub use method::{solve_equation, solve_equation_with_hook, Method, PostSolveHook};
pub use systems::{system, systems, JacobianFn, SystemEntry, VectorFn};
