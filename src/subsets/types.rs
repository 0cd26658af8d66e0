//! Subset value type.

use std::cmp::Ordering;
use std::fmt;

/// A subset of the ground set `{0, ..., 63}`, stored as a bitmask.
///
/// Identity is purely by membership. Subsets are `Copy` values and are
/// never mutated in place; [`with`](Subset::with) returns a new subset.
///
/// The total order compares cardinality first and the raw mask second, so
/// every strict subset sorts before each of its strict supersets.
///
/// # Examples
///
/// ```
/// use u_sperner::subsets::Subset;
///
/// let a = Subset::from_elements([0]);
/// let b = Subset::from_elements([0, 2]);
/// assert!(a.is_strict_subset_of(b));
/// assert!(a < b);
/// assert_eq!(b.to_string(), "{0, 2}");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subset {
    mask: u64,
}

impl Subset {
    /// Largest ground set a `Subset` can draw from.
    pub const CAPACITY: usize = 64;

    /// The empty set.
    pub const fn empty() -> Self {
        Self { mask: 0 }
    }

    /// The full ground set `{0, ..., n-1}`.
    ///
    /// # Panics
    /// Panics if `n > Subset::CAPACITY`.
    pub fn full(n: usize) -> Self {
        assert!(n <= Self::CAPACITY, "ground set of {n} exceeds subset capacity");
        let mask = if n == Self::CAPACITY {
            u64::MAX
        } else {
            (1u64 << n) - 1
        };
        Self { mask }
    }

    /// Builds a subset from its raw bitmask.
    pub const fn from_mask(mask: u64) -> Self {
        Self { mask }
    }

    /// Builds a subset from its elements. Repeated elements are ignored.
    ///
    /// # Panics
    /// Panics if an element is `>= Subset::CAPACITY`.
    pub fn from_elements<I: IntoIterator<Item = usize>>(elements: I) -> Self {
        elements
            .into_iter()
            .fold(Self::empty(), |acc, e| acc.with(e))
    }

    /// Raw bitmask.
    pub const fn mask(self) -> u64 {
        self.mask
    }

    /// Returns this subset plus `element`.
    ///
    /// # Panics
    /// Panics if `element >= Subset::CAPACITY`.
    pub fn with(self, element: usize) -> Self {
        assert!(
            element < Self::CAPACITY,
            "element {element} exceeds subset capacity"
        );
        Self {
            mask: self.mask | (1u64 << element),
        }
    }

    /// Whether `element` is a member.
    pub fn contains(self, element: usize) -> bool {
        element < Self::CAPACITY && self.mask & (1u64 << element) != 0
    }

    /// Number of members.
    pub fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// `self ⊆ other`.
    pub fn is_subset_of(self, other: Subset) -> bool {
        self.mask & !other.mask == 0
    }

    /// `self ⊊ other`: a subset and not equal.
    pub fn is_strict_subset_of(self, other: Subset) -> bool {
        self != other && self.is_subset_of(other)
    }

    /// Whether one of the two contains the other.
    pub fn is_comparable_with(self, other: Subset) -> bool {
        self.is_subset_of(other) || other.is_subset_of(self)
    }

    /// Members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        let mut rest = self.mask;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let e = rest.trailing_zeros() as usize;
            rest &= rest - 1;
            Some(e)
        })
    }
}

impl Ord for Subset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.mask.cmp(&other.mask))
    }
}

impl PartialOrd for Subset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, e) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        f.write_str("}")
    }
}

/// Whether no member of `family` is contained in another member.
///
/// Repeated subsets count as comparable, so a family with duplicates is
/// never an antichain.
pub fn is_antichain(family: &[Subset]) -> bool {
    family.iter().enumerate().all(|(i, &a)| {
        family[i + 1..]
            .iter()
            .all(|&b| !a.is_comparable_with(b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_membership() {
        let s = Subset::from_elements([1, 3, 3]);
        assert_eq!(s.len(), 2);
        assert!(s.contains(1));
        assert!(s.contains(3));
        assert!(!s.contains(0));
        assert!(!s.contains(200));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(s.mask(), 0b1010);
    }

    #[test]
    fn test_empty_and_full() {
        assert!(Subset::empty().is_empty());
        assert_eq!(Subset::full(0), Subset::empty());
        assert_eq!(Subset::full(3), Subset::from_elements([0, 1, 2]));
        assert_eq!(Subset::full(64).len(), 64);
    }

    #[test]
    #[should_panic]
    fn test_element_out_of_range() {
        let _ = Subset::empty().with(64);
    }

    #[test]
    fn test_strict_subset() {
        let empty = Subset::empty();
        let a = Subset::from_elements([0]);
        let b = Subset::from_elements([1]);
        let ab = Subset::from_elements([0, 1]);

        assert!(empty.is_strict_subset_of(a));
        assert!(a.is_strict_subset_of(ab));
        assert!(!a.is_strict_subset_of(a));
        assert!(a.is_subset_of(a));
        assert!(!a.is_strict_subset_of(b));
        assert!(!b.is_strict_subset_of(a));
        assert!(!ab.is_strict_subset_of(a));
        assert!(!a.is_comparable_with(b));
    }

    #[test]
    fn test_display() {
        assert_eq!(Subset::empty().to_string(), "{}");
        assert_eq!(Subset::from_elements([2, 0]).to_string(), "{0, 2}");
        assert_eq!(format!("{:?}", Subset::from_elements([4])), "{4}");
    }

    #[test]
    fn test_order_by_cardinality_first() {
        let mut family = vec![
            Subset::from_elements([0, 1]),
            Subset::from_elements([5]),
            Subset::empty(),
            Subset::from_elements([0]),
        ];
        family.sort();
        assert_eq!(
            family,
            vec![
                Subset::empty(),
                Subset::from_elements([0]),
                Subset::from_elements([5]),
                Subset::from_elements([0, 1]),
            ]
        );
    }

    #[test]
    fn test_is_antichain() {
        let singletons: Vec<Subset> = (0..3).map(|e| Subset::from_elements([e])).collect();
        assert!(is_antichain(&singletons));
        assert!(is_antichain(&[]));

        let chain = [Subset::from_elements([0]), Subset::from_elements([0, 1])];
        assert!(!is_antichain(&chain));

        let repeated = [Subset::from_elements([2]), Subset::from_elements([2])];
        assert!(!is_antichain(&repeated));
    }

    proptest! {
        #[test]
        fn strict_subset_implies_smaller(a in any::<u64>(), b in any::<u64>()) {
            let (a, b) = (Subset::from_mask(a), Subset::from_mask(b));
            if a.is_strict_subset_of(b) {
                prop_assert!(a < b);
                prop_assert!(a.len() < b.len());
                prop_assert!(!b.is_strict_subset_of(a));
            }
        }

        #[test]
        fn order_is_consistent_with_equality(a in any::<u64>(), b in any::<u64>()) {
            let (a, b) = (Subset::from_mask(a), Subset::from_mask(b));
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        }

        #[test]
        fn iter_roundtrips_through_elements(mask in any::<u64>()) {
            let s = Subset::from_mask(mask);
            prop_assert_eq!(Subset::from_elements(s.iter()), s);
            prop_assert_eq!(s.iter().count(), s.len());
        }
    }
}
