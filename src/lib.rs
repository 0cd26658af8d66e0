//! Maximum antichains in the subset lattice via integer linear programming.
//!
//! Builds the classic pairwise ILP for Sperner's theorem and hands it to an
//! external engine:
//!
//! - **Subsets**: power set enumeration and a bitmask [`Subset`](subsets::Subset)
//!   value type with strict-subset tests.
//! - **ILP**: solver-agnostic modeling layer (binary variables, named linear
//!   constraints, objective), the [`IlpSolver`](ilp::IlpSolver) engine trait,
//!   a `good_lp`/`microlp` adapter, and a scoped
//!   [`EngineSession`](ilp::EngineSession).
//! - **Antichain**: the Sperner model builder and runner.
//!
//! # Architecture
//!
//! Optimization itself (simplex, branch-and-bound) stays inside the engine.
//! This crate only enumerates, assembles the model, and reads the answer
//! back as a family of subsets.
//!
//! ```
//! use u_sperner::antichain::{SpernerConfig, SpernerRunner};
//!
//! let solution = SpernerRunner::run(4, &SpernerConfig::default()).unwrap();
//! assert_eq!(solution.size(), 6);
//! ```

pub mod antichain;
mod error;
pub mod ilp;
pub mod subsets;

pub use error::{SpernerError, SpernerResult};
