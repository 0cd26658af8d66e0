//! Antichain model configuration.

use super::types::expected_constraint_count;
use crate::ilp::SolverConfig;
use crate::subsets::Subset;

/// Configuration for building and solving Sperner models.
///
/// # Examples
///
/// ```
/// use u_sperner::antichain::SpernerConfig;
///
/// let config = SpernerConfig::default()
///     .with_max_ground_size(12)
///     .with_variable_prefix("s_");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SpernerConfig {
    /// Largest accepted ground set size. Capped by [`Subset::CAPACITY`].
    pub max_ground_size: usize,

    /// Largest accepted number of exclusion constraints (`3^n - 2^n`).
    ///
    /// Each constraint costs a little over 200 bytes, so the default of two
    /// million keeps a model under about 450 MB and admits `n <= 13`.
    pub max_constraints: u128,

    /// Model name prefix; the ground set size is appended.
    pub model_name_prefix: String,

    /// Variable name prefix; the variable ordinal is appended.
    pub variable_prefix: String,

    /// Constraint name prefix; the constraint ordinal is appended.
    pub constraint_prefix: String,

    /// Engine settings used when a session is opened on the caller's behalf.
    pub solver: SolverConfig,
}

impl Default for SpernerConfig {
    fn default() -> Self {
        Self {
            max_ground_size: 20,
            max_constraints: 2_000_000,
            model_name_prefix: "Sperner's ".into(),
            variable_prefix: "x_".into(),
            constraint_prefix: "c_".into(),
            solver: SolverConfig::default(),
        }
    }
}

impl SpernerConfig {
    pub fn with_max_ground_size(mut self, n: usize) -> Self {
        self.max_ground_size = n;
        self
    }

    pub fn with_max_constraints(mut self, count: u128) -> Self {
        self.max_constraints = count;
        self
    }

    pub fn with_model_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.model_name_prefix = prefix.into();
        self
    }

    pub fn with_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.variable_prefix = prefix.into();
        self
    }

    pub fn with_constraint_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.constraint_prefix = prefix.into();
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Model name for a ground set of `n` elements.
    pub fn model_name(&self, n: usize) -> String {
        format!("{}{n}", self.model_name_prefix)
    }

    /// Largest ground set size admitted by both
    /// [`max_ground_size`](Self::max_ground_size) and
    /// [`max_constraints`](Self::max_constraints).
    pub fn largest_ground_size(&self) -> usize {
        (0..=self.max_ground_size.min(Subset::CAPACITY))
            .take_while(|&n| {
                expected_constraint_count(n).is_some_and(|count| count <= self.max_constraints)
            })
            .last()
            .unwrap_or(0)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_ground_size > Subset::CAPACITY {
            return Err(format!(
                "max_ground_size must be at most {}, got {}",
                Subset::CAPACITY,
                self.max_ground_size
            ));
        }
        if self.variable_prefix.is_empty() {
            return Err("variable_prefix must not be empty".into());
        }
        if self.constraint_prefix.is_empty() {
            return Err("constraint_prefix must not be empty".into());
        }
        self.solver.validate()
    }
}
