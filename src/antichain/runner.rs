//! Building, solving and reading back Sperner models.

use super::builder::{ground_size, populate};
use super::config::SpernerConfig;
use super::types::{AntichainModel, AntichainSolution};
use crate::error::{SpernerError, SpernerResult};
use crate::ilp::{EngineSession, IlpSolver, MicrolpSolver, SolverStatus};
use log::info;

impl AntichainModel {
    /// Optimizes the model in `session` and maps the answer back to subsets.
    pub fn solve_with<S: IlpSolver>(
        &self,
        session: &mut EngineSession<S>,
    ) -> SpernerResult<AntichainSolution> {
        let solution = session.optimize(&self.model)?;
        if solution.status != SolverStatus::Optimal {
            return Err(SpernerError::NotOptimal(solution.status));
        }

        let mut selected: Vec<_> = solution
            .selected()
            .into_iter()
            .filter_map(|var| self.mapping.subset(var))
            .collect();
        selected.sort_unstable();

        Ok(AntichainSolution {
            n: self.n,
            objective_value: solution.objective_value,
            selected,
            solve_time_ms: solution.solve_time_ms,
        })
    }
}

/// Runs the maximum-antichain computation end to end.
///
/// # Usage
///
/// ```
/// use u_sperner::antichain::{SpernerConfig, SpernerRunner};
///
/// let solution = SpernerRunner::run(3, &SpernerConfig::default()).unwrap();
/// assert_eq!(solution.size(), 3);
/// assert!(solution.is_antichain());
/// ```
pub struct SpernerRunner;

impl SpernerRunner {
    /// Builds and solves the model for `n` in a session opened on the
    /// bundled `microlp` engine with `config.solver`.
    ///
    /// The session is closed before returning, on success and on error.
    pub fn run(n: i64, config: &SpernerConfig) -> SpernerResult<AntichainSolution> {
        let mut session = EngineSession::open(MicrolpSolver::new(), config.solver.clone())?;
        Self::run_in(n, &mut session, config)
    }

    /// Builds and solves the model for `n` in the caller's session.
    ///
    /// `n` is checked before anything is enumerated. Engine failures are
    /// returned as [`SpernerError::Model`].
    pub fn run_in<S: IlpSolver>(
        n: i64,
        session: &mut EngineSession<S>,
        config: &SpernerConfig,
    ) -> SpernerResult<AntichainSolution> {
        let size = ground_size(n, config)?;
        let model = session.create_model(config.model_name(size));
        let built = populate(model, size, config)?;
        let solution = built.solve_with(session)?;
        info!(
            "n = {size}: maximum antichain of {} subsets in {} ms",
            solution.size(),
            solution.solve_time_ms
        );
        Ok(solution)
    }
}
