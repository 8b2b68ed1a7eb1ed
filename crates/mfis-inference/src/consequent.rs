//! Consequent truth qualification.

use std::collections::BTreeMap;

use mfis_core::errors::{InferenceError, InferenceResult};
use mfis_core::{ConsequentMethod, FuzzySet, FuzzySetCatalogue, SetKey};

/// Truth-qualify one set by a firing strength. Returns a new set; the input
/// is left untouched.
pub fn qualify(set: &FuzzySet, similarity: f64, method: ConsequentMethod) -> FuzzySet {
    let similarity = similarity.clamp(0.0, 1.0);
    let curve = match method {
        ConsequentMethod::Clip => set.curve().map_degrees(|y| y.min(similarity)),
        ConsequentMethod::Scale => set.curve().map_degrees(|y| similarity * y),
    };
    set.with_curve(curve)
}

/// Qualify every risk set named in the similarity map, in key order.
pub fn build(
    similarities: &BTreeMap<SetKey, f64>,
    catalogue: &FuzzySetCatalogue,
    method: ConsequentMethod,
) -> InferenceResult<Vec<FuzzySet>> {
    similarities
        .iter()
        .map(|(key, &similarity)| {
            let set = catalogue
                .risk_set(key)
                .ok_or_else(|| InferenceError::UnknownRiskSet {
                    key: key.to_string(),
                })?;
            Ok(qualify(set, similarity, method))
        })
        .collect()
}
