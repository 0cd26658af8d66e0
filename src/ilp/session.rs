//! Scoped engine session.

use super::error::{IlpError, IlpResult};
use super::model::IlpModel;
use super::solver::{IlpSolution, IlpSolver, SolverConfig};
use log::{debug, info};
use std::time::Instant;

/// An open session with an ILP engine.
///
/// The session owns the engine and its configuration for as long as models
/// are being solved. It is acquired with [`EngineSession::open`] and
/// released when dropped; nothing about the engine lives in global state.
///
/// # Examples
///
/// ```
/// use u_sperner::ilp::{EngineSession, MicrolpSolver, Objective, SolverConfig};
///
/// let mut session = EngineSession::open(MicrolpSolver::new(), SolverConfig::default()).unwrap();
/// let mut model = session.create_model("single");
/// let x = model.add_binary_var("x").unwrap();
/// model.set_objective(Objective::Maximize { terms: vec![(x, 1.0)] });
///
/// let solution = session.optimize(&model).unwrap();
/// assert!(solution.is_selected(x));
/// assert_eq!(session.models_solved(), 1);
/// ```
pub struct EngineSession<S: IlpSolver> {
    solver: S,
    config: SolverConfig,
    models_created: usize,
    models_solved: usize,
    opened_at: Instant,
}

impl<S: IlpSolver> EngineSession<S> {
    /// Opens a session on `solver` after validating `config`.
    pub fn open(solver: S, config: SolverConfig) -> IlpResult<Self> {
        config.validate().map_err(IlpError::InvalidConfig)?;
        info!("opened {} engine session", solver.name());
        Ok(Self {
            solver,
            config,
            models_created: 0,
            models_solved: 0,
            opened_at: Instant::now(),
        })
    }

    /// Creates an empty model bound to nothing but its name.
    pub fn create_model(&mut self, name: impl Into<String>) -> IlpModel {
        self.models_created += 1;
        IlpModel::new(name)
    }

    /// Solves `model` with the session's engine and configuration.
    ///
    /// This is a single blocking call. Any engine failure is returned
    /// unchanged.
    pub fn optimize(&mut self, model: &IlpModel) -> IlpResult<IlpSolution> {
        debug!(
            "optimizing `{}` with {} ({} vars, {} constraints)",
            model.name,
            self.solver.name(),
            model.var_count(),
            model.constraint_count()
        );
        let solution = self.solver.solve(model, &self.config)?;
        self.models_solved += 1;
        Ok(solution)
    }

    /// The engine behind this session.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// The configuration every solve runs with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Number of models created through [`create_model`](Self::create_model).
    pub fn models_created(&self) -> usize {
        self.models_created
    }

    /// Number of successful [`optimize`](Self::optimize) calls.
    pub fn models_solved(&self) -> usize {
        self.models_solved
    }
}

impl<S: IlpSolver> Drop for EngineSession<S> {
    fn drop(&mut self) {
        info!(
            "closed {} engine session after {} ms ({} models solved)",
            self.solver.name(),
            self.opened_at.elapsed().as_millis(),
            self.models_solved
        );
    }
}
