//! ILP model definition.

use super::error::{IlpError, IlpResult};
use super::variables::{BinaryVar, ConstraintId, VarId};
use std::collections::HashMap;
use std::fmt;

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `lhs <= rhs`
    LessEq,
    /// `lhs >= rhs`
    GreaterEq,
    /// `lhs == rhs`
    Equal,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Relation::LessEq => "<=",
            Relation::GreaterEq => ">=",
            Relation::Equal => "==",
        };
        f.write_str(op)
    }
}

/// A named linear constraint `sum(coef * var) <relation> rhs`.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    /// Constraint name (unique within a model).
    pub name: String,
    /// (variable, coefficient) pairs of the left-hand side.
    pub terms: Vec<(VarId, f64)>,
    /// Comparison operator.
    pub relation: Relation,
    /// Right-hand side constant.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Evaluates the left-hand side under `values` (indexed by [`VarId`]).
    pub fn lhs_value(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coef)| coef * values.get(var.0).copied().unwrap_or(0.0))
            .sum()
    }

    /// Whether `values` satisfy the constraint up to `tolerance`.
    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.lhs_value(values);
        match self.relation {
            Relation::LessEq => lhs <= self.rhs + tolerance,
            Relation::GreaterEq => lhs >= self.rhs - tolerance,
            Relation::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// Objective function of an ILP model.
#[derive(Debug, Clone)]
pub enum Objective {
    /// Minimize a linear combination of variables.
    Minimize {
        /// (variable, coefficient) pairs.
        terms: Vec<(VarId, f64)>,
    },

    /// Maximize a linear combination of variables.
    Maximize {
        /// (variable, coefficient) pairs.
        terms: Vec<(VarId, f64)>,
    },
}

impl Objective {
    /// The (variable, coefficient) pairs regardless of direction.
    pub fn terms(&self) -> &[(VarId, f64)] {
        match self {
            Objective::Minimize { terms } | Objective::Maximize { terms } => terms,
        }
    }

    /// Whether the objective is to be maximized.
    pub fn is_maximize(&self) -> bool {
        matches!(self, Objective::Maximize { .. })
    }

    /// Evaluates the objective under `values` (indexed by [`VarId`]).
    pub fn value(&self, values: &[f64]) -> f64 {
        self.terms()
            .iter()
            .map(|&(var, coef)| coef * values.get(var.0).copied().unwrap_or(0.0))
            .sum()
    }
}

/// An integer linear programming model over binary variables.
///
/// Owns variables, named linear constraints, and an optional objective.
/// Names are unique per kind; adding a duplicate is an error rather
/// than a silent overwrite.
///
/// # Examples
///
/// ```
/// use u_sperner::ilp::{IlpModel, Objective, Relation};
///
/// let mut model = IlpModel::new("example");
/// let a = model.add_binary_var("a").unwrap();
/// let b = model.add_binary_var("b").unwrap();
/// model
///     .add_linear_constraint(vec![(a, 1.0), (b, 1.0)], Relation::LessEq, 1.0, "c_0")
///     .unwrap();
/// model.set_objective(Objective::Maximize {
///     terms: vec![(a, 1.0), (b, 1.0)],
/// });
/// assert!(model.validate().is_ok());
/// assert_eq!(model.var_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct IlpModel {
    /// Model name.
    pub name: String,
    vars: Vec<BinaryVar>,
    var_names: HashMap<String, VarId>,
    constraints: Vec<LinearConstraint>,
    constraint_names: HashMap<String, ConstraintId>,
    objective: Option<Objective>,
}

impl IlpModel {
    /// Creates a new empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: Vec::new(),
            var_names: HashMap::new(),
            constraints: Vec::new(),
            constraint_names: HashMap::new(),
            objective: None,
        }
    }

    /// Adds a free binary variable and returns its handle.
    pub fn add_binary_var(&mut self, name: impl Into<String>) -> IlpResult<VarId> {
        self.add_var(BinaryVar::new(name))
    }

    /// Adds a prepared variable and returns its handle.
    pub fn add_var(&mut self, var: BinaryVar) -> IlpResult<VarId> {
        if self.var_names.contains_key(&var.name) {
            return Err(IlpError::DuplicateVariable(var.name));
        }
        let id = VarId(self.vars.len());
        self.var_names.insert(var.name.clone(), id);
        self.vars.push(var);
        Ok(id)
    }

    /// Adds a named linear constraint and returns its handle.
    pub fn add_linear_constraint(
        &mut self,
        terms: Vec<(VarId, f64)>,
        relation: Relation,
        rhs: f64,
        name: impl Into<String>,
    ) -> IlpResult<ConstraintId> {
        let name = name.into();
        if self.constraint_names.contains_key(&name) {
            return Err(IlpError::DuplicateConstraint(name));
        }
        self.check_terms(&terms)?;
        let id = ConstraintId(self.constraints.len());
        self.constraint_names.insert(name.clone(), id);
        self.constraints.push(LinearConstraint {
            name,
            terms,
            relation,
            rhs,
        });
        Ok(id)
    }

    /// Sets (or replaces) the objective function.
    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = Some(objective);
    }

    /// Validates the model for consistency.
    ///
    /// Checks that an objective is present and that every referenced
    /// variable belongs to this model.
    pub fn validate(&self) -> IlpResult<()> {
        let objective = self
            .objective
            .as_ref()
            .ok_or_else(|| IlpError::MissingObjective(self.name.clone()))?;
        self.check_terms(objective.terms())?;
        for constraint in &self.constraints {
            self.check_terms(&constraint.terms)?;
        }
        Ok(())
    }

    fn check_terms(&self, terms: &[(VarId, f64)]) -> IlpResult<()> {
        match terms.iter().find(|(var, _)| var.0 >= self.vars.len()) {
            Some(&(var, _)) => Err(IlpError::UnknownVariable {
                index: var.0,
                count: self.vars.len(),
            }),
            None => Ok(()),
        }
    }

    /// Looks up a variable by handle.
    pub fn var(&self, id: VarId) -> Option<&BinaryVar> {
        self.vars.get(id.0)
    }

    /// Looks up a variable handle by name.
    pub fn var_by_name(&self, name: &str) -> Option<VarId> {
        self.var_names.get(name).copied()
    }

    /// Looks up a constraint by handle.
    pub fn constraint(&self, id: ConstraintId) -> Option<&LinearConstraint> {
        self.constraints.get(id.0)
    }

    /// Looks up a constraint handle by name.
    pub fn constraint_by_name(&self, name: &str) -> Option<ConstraintId> {
        self.constraint_names.get(name).copied()
    }

    /// All variables, in handle order.
    pub fn vars(&self) -> &[BinaryVar] {
        &self.vars
    }

    /// All constraints, in insertion order.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// The objective, if set.
    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    /// Returns the number of variables.
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_var_model() -> (IlpModel, VarId, VarId) {
        let mut model = IlpModel::new("test");
        let a = model.add_binary_var("a").unwrap();
        let b = model.add_binary_var("b").unwrap();
        (model, a, b)
    }

    #[test]
    fn test_model_creation() {
        let (mut model, a, b) = two_var_model();
        model
            .add_linear_constraint(vec![(a, 1.0), (b, 1.0)], Relation::LessEq, 1.0, "c_0")
            .unwrap();
        model.set_objective(Objective::Maximize {
            terms: vec![(a, 1.0), (b, 1.0)],
        });

        assert_eq!(model.var_count(), 2);
        assert_eq!(model.constraint_count(), 1);
        assert!(model.objective().is_some());
        assert!(model.validate().is_ok());
        assert_eq!(model.var_by_name("b"), Some(b));
        assert_eq!(model.var(a).unwrap().name, "a");
    }

    #[test]
    fn test_duplicate_variable() {
        let (mut model, _, _) = two_var_model();
        assert_eq!(
            model.add_binary_var("a"),
            Err(IlpError::DuplicateVariable("a".into()))
        );
        assert_eq!(model.var_count(), 2);
    }

    #[test]
    fn test_duplicate_constraint() {
        let (mut model, a, b) = two_var_model();
        model
            .add_linear_constraint(vec![(a, 1.0)], Relation::LessEq, 1.0, "c")
            .unwrap();
        let err = model
            .add_linear_constraint(vec![(b, 1.0)], Relation::LessEq, 1.0, "c")
            .unwrap_err();
        assert_eq!(err, IlpError::DuplicateConstraint("c".into()));
        assert_eq!(model.constraint_count(), 1);
    }

    #[test]
    fn test_unknown_variable() {
        let (mut model, a, _) = two_var_model();
        let err = model
            .add_linear_constraint(vec![(a, 1.0), (VarId(9), 1.0)], Relation::LessEq, 1.0, "c")
            .unwrap_err();
        assert_eq!(err, IlpError::UnknownVariable { index: 9, count: 2 });
    }

    #[test]
    fn test_missing_objective() {
        let (model, _, _) = two_var_model();
        assert_eq!(
            model.validate(),
            Err(IlpError::MissingObjective("test".into()))
        );
    }

    #[test]
    fn test_objective_with_foreign_variable() {
        let (mut model, _, _) = two_var_model();
        model.set_objective(Objective::Minimize {
            terms: vec![(VarId(5), 1.0)],
        });
        assert!(matches!(
            model.validate(),
            Err(IlpError::UnknownVariable { index: 5, .. })
        ));
    }

    #[test]
    fn test_constraint_satisfaction() {
        let (mut model, a, b) = two_var_model();
        let id = model
            .add_linear_constraint(vec![(a, 1.0), (b, 1.0)], Relation::LessEq, 1.0, "c")
            .unwrap();
        let c = model.constraint(id).unwrap();
        assert!(c.is_satisfied(&[1.0, 0.0], 1e-9));
        assert!(!c.is_satisfied(&[1.0, 1.0], 1e-9));
        assert_eq!(model.constraint_by_name("c"), Some(id));

        let eq = LinearConstraint {
            name: "eq".into(),
            terms: vec![(a, 2.0)],
            relation: Relation::Equal,
            rhs: 2.0,
        };
        assert!(eq.is_satisfied(&[1.0, 0.0], 1e-9));
        assert!(!eq.is_satisfied(&[0.0, 0.0], 1e-9));
    }

    #[test]
    fn test_objective_value() {
        let obj = Objective::Maximize {
            terms: vec![(VarId(0), 1.0), (VarId(1), 2.5)],
        };
        assert!(obj.is_maximize());
        assert!((obj.value(&[1.0, 1.0]) - 3.5).abs() < 1e-12);
        assert_eq!(Relation::LessEq.to_string(), "<=");
    }
}
