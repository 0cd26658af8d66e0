//! Maximum antichains in the subset lattice as an ILP (Sperner's theorem).
//!
//! For a ground set of `n` elements the model holds one binary variable per
//! subset, forbids selecting two subsets where one strictly contains the
//! other, and maximizes the number of selected subsets. By Sperner's theorem
//! the optimum is `C(n, floor(n/2))`.
//!
//! # Key Types
//!
//! - [`SpernerConfig`]: size limit, naming, engine settings
//! - [`build_model`]: assembles the model without solving it
//! - [`SpernerRunner`]: builds, solves and reads back in one call
//! - [`AntichainSolution`]: the selected subsets and their count
//!
//! # Scaling
//!
//! The pairwise formulation needs `2^n` variables and `3^n - 2^n`
//! constraints. Sizes above [`SpernerConfig::max_ground_size`] (20 by
//! default), or whose constraint count exceeds
//! [`SpernerConfig::max_constraints`] (two million by default, so `n <= 13`),
//! are rejected before enumeration with
//! [`SpernerError::ResourceExhaustion`](crate::SpernerError::ResourceExhaustion).
//!
//! # References
//!
//! - Sperner (1928), "Ein Satz über Untermengen einer endlichen Menge"
//! - Lubell (1966), "A short proof of Sperner's lemma"

mod builder;
mod config;
mod runner;
mod types;

pub use builder::build_model;
pub use config::SpernerConfig;
pub use runner::SpernerRunner;
pub use types::{
    binomial, expected_constraint_count, sperner_bound, AntichainModel, AntichainSolution,
    VariableMap,
};
