//! Antichain model types.

use crate::ilp::{IlpModel, VarId};
use crate::subsets::{is_antichain, Subset};
use std::collections::{BTreeMap, HashMap};

/// One-to-one association between decision variables and subsets.
///
/// Lookups work in both directions. Iteration follows variable handle
/// order, which is the enumeration order.
#[derive(Debug, Clone, Default)]
pub struct VariableMap {
    by_var: BTreeMap<VarId, Subset>,
    by_subset: HashMap<Subset, VarId>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `var <-> subset`.
    ///
    /// Returns `false`, leaving the map unchanged, if either side is
    /// already mapped.
    pub fn insert(&mut self, var: VarId, subset: Subset) -> bool {
        if self.by_var.contains_key(&var) || self.by_subset.contains_key(&subset) {
            return false;
        }
        self.by_var.insert(var, subset);
        self.by_subset.insert(subset, var);
        true
    }

    /// The subset a variable stands for.
    pub fn subset(&self, var: VarId) -> Option<Subset> {
        self.by_var.get(&var).copied()
    }

    /// The variable standing for a subset.
    pub fn var(&self, subset: Subset) -> Option<VarId> {
        self.by_subset.get(&subset).copied()
    }

    /// `(variable, subset)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, Subset)> + '_ {
        self.by_var.iter().map(|(&v, &s)| (v, s))
    }

    /// All variables in handle order.
    pub fn vars(&self) -> impl Iterator<Item = VarId> + '_ {
        self.by_var.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_var.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_var.is_empty()
    }
}

/// A built Sperner model: the ILP plus the variable-to-subset association.
#[derive(Debug, Clone)]
pub struct AntichainModel {
    pub(super) n: usize,
    pub(super) model: IlpModel,
    pub(super) mapping: VariableMap,
}

impl AntichainModel {
    /// Size of the ground set.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The underlying ILP model.
    pub fn model(&self) -> &IlpModel {
        &self.model
    }

    /// The variable-to-subset association.
    pub fn mapping(&self) -> &VariableMap {
        &self.mapping
    }

    /// Releases the ILP model, dropping the association.
    pub fn into_model(self) -> IlpModel {
        self.model
    }

    pub fn var_count(&self) -> usize {
        self.model.var_count()
    }

    pub fn constraint_count(&self) -> usize {
        self.model.constraint_count()
    }

    /// Whether the model holds an exclusion constraint over `a` and `b`.
    ///
    /// The pair is unordered. Linear in the number of constraints.
    pub fn has_exclusion(&self, a: Subset, b: Subset) -> bool {
        let (Some(va), Some(vb)) = (self.mapping.var(a), self.mapping.var(b)) else {
            return false;
        };
        self.model.constraints().iter().any(|c| {
            c.terms.len() == 2
                && ((c.terms[0].0 == va && c.terms[1].0 == vb)
                    || (c.terms[0].0 == vb && c.terms[1].0 == va))
        })
    }
}

/// An optimal antichain read back from a solved model.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntichainSolution {
    /// Size of the ground set.
    pub n: usize,
    /// Objective value reported by the engine.
    pub objective_value: f64,
    /// Subsets whose variable is 1, in canonical subset order.
    pub selected: Vec<Subset>,
    /// Solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl AntichainSolution {
    /// Number of selected subsets.
    pub fn size(&self) -> usize {
        self.selected.len()
    }

    /// Whether the selected subsets are pairwise incomparable.
    pub fn is_antichain(&self) -> bool {
        is_antichain(&self.selected)
    }

    /// Whether the size equals `C(n, n/2)`.
    pub fn matches_sperner_bound(&self) -> bool {
        sperner_bound(self.n) == Some(self.size() as u128)
    }
}

/// Binomial coefficient `C(n, k)`, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 1..=k {
        // acc * (n - k + i) is divisible by i after the multiplication.
        acc = acc.checked_mul((n - k + i) as u128)? / i as u128;
    }
    Some(acc)
}

/// Largest antichain in the subset lattice of `n` elements: `C(n, floor(n/2))`.
///
/// # Examples
///
/// ```
/// use u_sperner::antichain::sperner_bound;
///
/// assert_eq!(sperner_bound(10), Some(252));
/// ```
pub fn sperner_bound(n: usize) -> Option<u128> {
    binomial(n, n / 2)
}

/// Number of strict-subset pairs among subsets of `n` elements: `3^n - 2^n`.
///
/// This is the number of exclusion constraints the pairwise model holds.
pub fn expected_constraint_count(n: usize) -> Option<u128> {
    let exp = u32::try_from(n).ok()?;
    let comparable = 3u128.checked_pow(exp)?;
    let equal = 2u128.checked_pow(exp)?;
    Some(comparable - equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_map_is_one_to_one() {
        let mut map = VariableMap::new();
        let a = Subset::from_elements([0]);
        let b = Subset::from_elements([1]);

        assert!(map.insert(VarId(0), a));
        assert!(!map.insert(VarId(0), b));
        assert!(!map.insert(VarId(1), a));
        assert!(map.insert(VarId(1), b));

        assert_eq!(map.len(), 2);
        assert_eq!(map.subset(VarId(1)), Some(b));
        assert_eq!(map.var(a), Some(VarId(0)));
        assert_eq!(map.var(Subset::empty()), None);
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![(VarId(0), a), (VarId(1), b)]
        );
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(5, 3), Some(10));
        assert_eq!(binomial(3, 4), Some(0));
        assert_eq!(binomial(64, 32), Some(1_832_624_140_942_590_534));
    }

    #[test]
    fn test_sperner_bound() {
        let expected = [1, 1, 2, 3, 6, 10, 20, 35, 70, 126, 252];
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!(sperner_bound(n), Some(value), "n = {n}");
        }
    }

    #[test]
    fn test_expected_constraint_count() {
        assert_eq!(expected_constraint_count(0), Some(0));
        assert_eq!(expected_constraint_count(1), Some(1));
        assert_eq!(expected_constraint_count(2), Some(5));
        assert_eq!(expected_constraint_count(3), Some(19));
        assert_eq!(expected_constraint_count(10), Some(58_025));
        assert_eq!(expected_constraint_count(200), None);
    }

    #[test]
    fn test_solution_checks() {
        let solution = AntichainSolution {
            n: 2,
            objective_value: 2.0,
            selected: vec![Subset::from_elements([0]), Subset::from_elements([1])],
            solve_time_ms: 0,
        };
        assert_eq!(solution.size(), 2);
        assert!(solution.is_antichain());
        assert!(solution.matches_sperner_bound());

        let chain = AntichainSolution {
            selected: vec![Subset::from_elements([0]), Subset::from_elements([0, 1])],
            ..solution
        };
        assert!(!chain.is_antichain());
    }
}
