//! Sperner model construction.

use super::config::SpernerConfig;
use super::types::{AntichainModel, VariableMap};
use crate::error::{SpernerError, SpernerResult};
use crate::ilp::{IlpModel, Objective, Relation, VarId};
use crate::subsets::{power_set_masks, Subset};
use log::{debug, trace};

/// Checks `n` against the input domain and the configured size and
/// constraint limits. Runs before anything is enumerated.
pub(super) fn ground_size(n: i64, config: &SpernerConfig) -> SpernerResult<usize> {
    config.validate().map_err(SpernerError::InvalidConfig)?;
    let size = usize::try_from(n).map_err(|_| SpernerError::InvalidInput { n })?;
    let max = config.largest_ground_size();
    if size > max {
        return Err(SpernerError::ResourceExhaustion { n: size, max });
    }
    Ok(size)
}

/// Builds the maximum-antichain model for a ground set of `n` elements.
///
/// The model has one binary variable `x_i` per subset of `{0, ..., n-1}`,
/// a constraint `x_i + x_j <= 1` for every pair with subset_i ⊊ subset_j,
/// and maximizes the sum of all variables. Its optimum is `C(n, n/2)`.
///
/// # Errors
///
/// - [`SpernerError::InvalidInput`] if `n` is negative
/// - [`SpernerError::ResourceExhaustion`] if `n` exceeds
///   [`SpernerConfig::max_ground_size`] or needs more than
///   [`SpernerConfig::max_constraints`] constraints
/// - [`SpernerError::InvalidConfig`] if the configuration is invalid
///
/// # Examples
///
/// ```
/// use u_sperner::antichain::{build_model, SpernerConfig};
///
/// let built = build_model(2, &SpernerConfig::default()).unwrap();
/// assert_eq!(built.var_count(), 4);
/// assert_eq!(built.constraint_count(), 5);
/// ```
pub fn build_model(n: i64, config: &SpernerConfig) -> SpernerResult<AntichainModel> {
    let size = ground_size(n, config)?;
    populate(IlpModel::new(config.model_name(size)), size, config)
}

/// Fills an empty `model` with the Sperner formulation for `n` elements.
pub(super) fn populate(
    mut model: IlpModel,
    n: usize,
    config: &SpernerConfig,
) -> SpernerResult<AntichainModel> {
    let subsets = power_set_masks(n);
    trace!("enumerated {} subsets of {n} elements", subsets.len());

    let mut mapping = VariableMap::new();
    for (i, subset) in subsets.into_iter().enumerate() {
        let var = model.add_binary_var(format!("{}{i}", config.variable_prefix))?;
        let fresh = mapping.insert(var, subset);
        debug_assert!(fresh, "subset {subset} enumerated more than once");
    }

    // Canonical order puts every strict subset before its supersets, so
    // scanning forward visits each comparable pair exactly once.
    let mut ordered: Vec<(Subset, VarId)> = mapping.iter().map(|(v, s)| (s, v)).collect();
    ordered.sort_unstable();

    let mut count = 0usize;
    for (i, &(lower, lower_var)) in ordered.iter().enumerate() {
        for &(upper, upper_var) in &ordered[i + 1..] {
            if lower.is_strict_subset_of(upper) {
                model.add_linear_constraint(
                    vec![(lower_var, 1.0), (upper_var, 1.0)],
                    Relation::LessEq,
                    1.0,
                    format!("{}{count}", config.constraint_prefix),
                )?;
                count += 1;
            }
        }
    }

    model.set_objective(Objective::Maximize {
        terms: mapping.vars().map(|v| (v, 1.0)).collect(),
    });

    debug!(
        "built `{}`: {} variables, {} exclusion constraints",
        model.name,
        model.var_count(),
        model.constraint_count()
    );

    Ok(AntichainModel { n, model, mapping })
}
