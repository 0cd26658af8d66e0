//! ILP solver interface and the `good_lp`/`microlp` engine adapter.

use super::error::{IlpError, IlpResult};
use super::model::{IlpModel, Relation};
use super::variables::{ConstraintId, VarId};
use good_lp::{
    microlp, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel,
    Variable,
};
use log::{debug, trace};
use std::time::Instant;

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverStatus {
    /// Proven optimal solution found.
    Optimal,
    /// Feasible (but not necessarily optimal) solution found.
    ///
    /// For engines that stop early, e.g. on a time or gap limit.
    /// [`MicrolpSolver`] never reports it.
    Feasible,
}

/// Solution returned by an ILP engine.
#[derive(Debug, Clone)]
pub struct IlpSolution {
    /// Solver status.
    pub status: SolverStatus,
    /// Objective function value.
    pub objective_value: f64,
    /// Variable values, indexed by [`VarId::index`].
    pub values: Vec<f64>,
    /// Solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl IlpSolution {
    /// Value assigned to `var`, or `None` for a foreign handle.
    pub fn value(&self, var: VarId) -> Option<f64> {
        self.values.get(var.index()).copied()
    }

    /// Whether `var` is set to 1.
    pub fn is_selected(&self, var: VarId) -> bool {
        self.value(var).is_some_and(|v| v > 0.5)
    }

    /// Handles of all variables set to 1, in handle order.
    pub fn selected(&self) -> Vec<VarId> {
        (0..self.values.len())
            .map(VarId)
            .filter(|&v| self.is_selected(v))
            .collect()
    }

    /// Constraints of `model` that these values violate beyond `tolerance`.
    pub fn violated_constraints(&self, model: &IlpModel, tolerance: f64) -> Vec<ConstraintId> {
        model
            .constraints()
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_satisfied(&self.values, tolerance))
            .map(|(i, _)| ConstraintId(i))
            .collect()
    }
}

/// Solver configuration.
///
/// Engine-level limits such as timeouts are not modeled here; they belong to
/// the engine behind the [`IlpSolver`] implementation.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum distance from 0 or 1 accepted for a binary variable's value.
    pub integrality_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            integrality_tolerance: 1e-6,
        }
    }
}

impl SolverConfig {
    pub fn with_integrality_tolerance(mut self, tolerance: f64) -> Self {
        self.integrality_tolerance = tolerance;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let tol = self.integrality_tolerance;
        if !tol.is_finite() || !(0.0..0.5).contains(&tol) {
            return Err(format!("integrality_tolerance must be in [0, 0.5), got {tol}"));
        }
        Ok(())
    }
}

/// Trait for ILP engine implementations.
///
/// Implementors translate an [`IlpModel`] into the engine's own
/// representation, run it, and map the answer back. Engine failures are
/// returned as [`IlpError`] and never swallowed.
///
/// A returned solution must carry [`SolverStatus::Optimal`] only when the
/// engine proved optimality. An engine that stops on a limit with an
/// incumbent returns it as [`SolverStatus::Feasible`]; callers that need a
/// proven optimum reject that status.
pub trait IlpSolver {
    /// Short engine name used in logs.
    fn name(&self) -> &str;

    /// Solves the model and returns a solution.
    fn solve(&self, model: &IlpModel, config: &SolverConfig) -> IlpResult<IlpSolution>;
}

/// Engine adapter backed by `good_lp` with the pure-Rust `microlp` backend.
///
/// `microlp` runs branch-and-bound over a dual simplex; it only ever
/// reports proven optima, so solutions carry [`SolverStatus::Optimal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }
}

fn expression(terms: &[(VarId, f64)], handles: &[Variable]) -> Expression {
    let mut expr = Expression::with_capacity(terms.len());
    for &(var, coef) in terms {
        expr.add_mul(coef, handles[var.index()]);
    }
    expr
}

impl IlpSolver for MicrolpSolver {
    fn name(&self) -> &str {
        "microlp"
    }

    fn solve(&self, model: &IlpModel, config: &SolverConfig) -> IlpResult<IlpSolution> {
        config.validate().map_err(IlpError::InvalidConfig)?;
        model.validate()?;
        let objective = model
            .objective()
            .ok_or_else(|| IlpError::MissingObjective(model.name.clone()))?;

        let start_time = Instant::now();

        let mut vars = ProblemVariables::new();
        let handles: Vec<Variable> = model
            .vars()
            .iter()
            .map(|v| {
                let (min, max) = v.bounds();
                vars.add(variable().binary().min(min).max(max).name(v.name.clone()))
            })
            .collect();

        let goal = expression(objective.terms(), &handles);
        let unsolved = if objective.is_maximize() {
            vars.maximise(goal)
        } else {
            vars.minimise(goal)
        };
        let mut problem = unsolved.using(microlp);

        for c in model.constraints() {
            let lhs = expression(&c.terms, &handles);
            let constraint = match c.relation {
                Relation::LessEq => lhs.leq(c.rhs),
                Relation::GreaterEq => lhs.geq(c.rhs),
                Relation::Equal => lhs.eq(c.rhs),
            };
            problem.add_constraint(constraint);
        }
        trace!(
            "{}: handed `{}` to engine ({} vars, {} constraints)",
            self.name(),
            model.name,
            model.var_count(),
            model.constraint_count()
        );

        let solved = match problem.solve() {
            Ok(solved) => solved,
            Err(ResolutionError::Infeasible) => return Err(IlpError::Infeasible),
            Err(ResolutionError::Unbounded) => return Err(IlpError::Unbounded),
            Err(other) => return Err(IlpError::Engine(other.to_string())),
        };

        let values: Vec<f64> = handles.iter().map(|&h| solved.value(h)).collect();
        for (var, &value) in model.vars().iter().zip(&values) {
            let nearest = value.round();
            if (value - nearest).abs() > config.integrality_tolerance
                || !(nearest == 0.0 || nearest == 1.0)
            {
                return Err(IlpError::NonIntegral {
                    name: var.name.clone(),
                    value,
                });
            }
        }

        let solution = IlpSolution {
            status: SolverStatus::Optimal,
            objective_value: objective.value(&values),
            values,
            solve_time_ms: start_time.elapsed().as_millis() as i64,
        };
        debug!(
            "{}: `{}` solved, status {:?}, objective {} in {} ms",
            self.name(),
            model.name,
            solution.status,
            solution.objective_value,
            solution.solve_time_ms
        );
        Ok(solution)
    }
}
