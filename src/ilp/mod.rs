//! Integer Linear Programming (ILP) modeling layer.
//!
//! Provides a solver-agnostic model of binary decision variables, named
//! linear constraints and a linear objective, plus the boundary to the
//! engine that actually optimizes it.
//!
//! # Key Components
//!
//! - **Variables**: [`BinaryVar`] with [`VarId`] handles
//! - **Model**: [`IlpModel`]: container for variables, [`LinearConstraint`]s, [`Objective`]
//! - **Solver**: [`IlpSolver`] trait: interface for engine implementations
//! - **Session**: [`EngineSession`]: scoped ownership of an engine
//!
//! # Design
//!
//! This module defines the modeling layer only. It does NOT include a
//! simplex or branch-and-bound implementation. [`MicrolpSolver`] adapts the
//! model onto `good_lp` with the pure-Rust `microlp` backend; other engines
//! plug in through [`IlpSolver`].
//!
//! # References
//!
//! Wolsey (1998), "Integer Programming"

mod error;
mod model;
mod session;
mod solver;
mod variables;

pub use error::{IlpError, IlpResult};
pub use model::{IlpModel, LinearConstraint, Objective, Relation};
pub use session::EngineSession;
pub use solver::{IlpSolution, IlpSolver, MicrolpSolver, SolverConfig, SolverStatus};
pub use variables::{BinaryVar, ConstraintId, VarId};
