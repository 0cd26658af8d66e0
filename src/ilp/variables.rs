//! ILP variable types.

use std::fmt;

/// Handle to a variable owned by an [`IlpModel`](super::IlpModel).
///
/// Handles are dense ordinals: the `i`-th variable added to a model gets
/// `VarId(i)`. They are only meaningful for the model that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub(crate) usize);

impl VarId {
    /// Position of the variable in its model.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a constraint owned by an [`IlpModel`](super::IlpModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId(pub(crate) usize);

impl ConstraintId {
    /// Position of the constraint in its model.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A binary (0/1) decision variable.
#[derive(Debug, Clone)]
pub struct BinaryVar {
    /// Variable name (unique identifier within a model).
    pub name: String,
    /// Fixed value, if any.
    pub fixed: Option<bool>,
}

impl BinaryVar {
    /// Creates a free binary variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed: None,
        }
    }

    /// Creates a binary variable fixed to `value`.
    pub fn fixed(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            fixed: Some(value),
        }
    }

    /// Whether this variable is fixed to a single value.
    pub fn is_fixed(&self) -> bool {
        self.fixed.is_some()
    }

    /// Lower and upper bound implied by the fixing.
    pub fn bounds(&self) -> (f64, f64) {
        match self.fixed {
            Some(true) => (1.0, 1.0),
            Some(false) => (0.0, 0.0),
            None => (0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_var() {
        let b = BinaryVar::new("x_0");
        assert_eq!(b.name, "x_0");
        assert!(!b.is_fixed());
        assert_eq!(b.bounds(), (0.0, 1.0));
    }

    #[test]
    fn test_fixed_binary_var() {
        let one = BinaryVar::fixed("x_1", true);
        assert!(one.is_fixed());
        assert_eq!(one.bounds(), (1.0, 1.0));

        let zero = BinaryVar::fixed("x_2", false);
        assert_eq!(zero.bounds(), (0.0, 0.0));
    }

    #[test]
    fn test_handles() {
        assert_eq!(VarId(3).index(), 3);
        assert_eq!(VarId(3).to_string(), "#3");
        assert_eq!(ConstraintId(7).index(), 7);
        assert!(VarId(1) < VarId(2));
    }
}
