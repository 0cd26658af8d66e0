//! Errors raised by the ILP modeling layer and engine adapters.

use thiserror::Error;

/// Result type for model construction and solving.
pub type IlpResult<T> = Result<T, IlpError>;

/// Errors that can occur while building or solving an ILP model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IlpError {
    /// A variable with the same name already exists in the model.
    #[error("duplicate variable name: {0}")]
    DuplicateVariable(String),

    /// A constraint with the same name already exists in the model.
    #[error("duplicate constraint name: {0}")]
    DuplicateConstraint(String),

    /// A constraint or objective refers to a variable the model does not own.
    #[error("unknown variable index {index} (model has {count} variables)")]
    UnknownVariable { index: usize, count: usize },

    /// The model was handed to an engine without an objective.
    #[error("model `{0}` has no objective")]
    MissingObjective(String),

    /// The engine proved the model infeasible.
    #[error("model is infeasible")]
    Infeasible,

    /// The engine proved the objective unbounded.
    #[error("objective is unbounded")]
    Unbounded,

    /// The engine returned a value that is not within tolerance of 0 or 1.
    #[error("variable `{name}` has non-integral value {value}")]
    NonIntegral { name: String, value: f64 },

    /// Any other failure reported by the engine, passed through verbatim.
    #[error("engine failure: {0}")]
    Engine(String),

    /// Solver configuration rejected by [`SolverConfig::validate`](super::SolverConfig::validate).
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}
