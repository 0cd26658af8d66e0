//! Power set enumeration.

use super::types::Subset;
use std::collections::BTreeSet;

/// Enumerates every subset of `ground`.
///
/// Subsets are built incrementally: for each element `x`, every subset
/// produced so far is copied with `x` added, then the singleton `{x}` is
/// appended. The empty set is appended once at the very end.
///
/// The result holds exactly `2^n` distinct subsets for `n` distinct
/// elements. Callers must not rely on the order. Repeated elements in
/// `ground` are not a set and give unspecified output.
///
/// # Examples
///
/// ```
/// use u_sperner::subsets::power_set;
///
/// let family = power_set(&['a', 'b']);
/// assert_eq!(family.len(), 4);
/// assert!(family.iter().any(|s| s.is_empty()));
/// ```
pub fn power_set<T: Ord + Clone>(ground: &[T]) -> Vec<BTreeSet<T>> {
    let mut family: Vec<BTreeSet<T>> = Vec::new();
    for x in ground {
        let augmented: Vec<BTreeSet<T>> = family
            .iter()
            .map(|subset| {
                let mut next = subset.clone();
                next.insert(x.clone());
                next
            })
            .collect();
        family.extend(augmented);
        family.push(BTreeSet::from([x.clone()]));
    }
    family.push(BTreeSet::new());
    family
}

/// Power set of the ground set `{0, ..., n-1}` as [`Subset`] values.
///
/// # Panics
/// Panics if `n > Subset::CAPACITY`.
pub fn power_set_masks(n: usize) -> Vec<Subset> {
    assert!(
        n <= Subset::CAPACITY,
        "ground set of {n} exceeds subset capacity"
    );
    let ground: Vec<usize> = (0..n).collect();
    power_set(&ground)
        .into_iter()
        .map(Subset::from_elements)
        .collect()
}
