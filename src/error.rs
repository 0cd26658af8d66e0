//! Errors surfaced by the Sperner model builder.

use crate::ilp::{IlpError, SolverStatus};
use thiserror::Error;

/// Result type for building and solving antichain models.
pub type SpernerResult<T> = Result<T, SpernerError>;

/// Errors that can occur while building or solving an antichain model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpernerError {
    /// The ground set size is negative.
    #[error("ground set size must be non-negative, got {n}")]
    InvalidInput { n: i64 },

    /// The ground set is too large for the pairwise formulation.
    ///
    /// The model needs `2^n` variables and `3^n - 2^n` constraints.
    #[error("ground set size {n} exceeds the limit of {max} (model needs 2^n variables and 3^n - 2^n constraints)")]
    ResourceExhaustion { n: usize, max: usize },

    /// Configuration rejected by [`SpernerConfig::validate`](crate::antichain::SpernerConfig::validate).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Modeling or engine failure, passed through unchanged.
    #[error(transparent)]
    Model(#[from] IlpError),

    /// The engine returned without proving optimality.
    #[error("engine finished with status {0:?} instead of a proven optimum")]
    NotOptimal(SolverStatus),
}
