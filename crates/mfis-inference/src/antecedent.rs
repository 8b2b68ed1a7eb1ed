//! Antecedent evaluation: rule strength by min t-norm, per-consequent
//! similarity by max s-norm.

use std::collections::{BTreeMap, HashMap};

use mfis_core::errors::{InferenceError, InferenceResult};
use mfis_core::models::RuleFirings;
use mfis_core::{FuzzySetCatalogue, Rule, RuleList, SetKey};
use tracing::debug;

/// Output of evaluating every rule against one application.
#[derive(Debug, Clone, PartialEq)]
pub struct AntecedentOutcome {
    /// Every risk key, mapped to the max strength of its rules (0 if none fired).
    pub similarities: BTreeMap<SetKey, f64>,
    /// Per-rule strengths, aligned with the rule list.
    pub firings: RuleFirings,
}

/// Firing strength of one rule: the minimum of its antecedent degrees.
///
/// Each clause reads the applicant's index for its variable, clamped into
/// the clause set's domain.
pub fn rule_strength(
    rule: &Rule,
    data: &HashMap<&str, i64>,
    catalogue: &FuzzySetCatalogue,
) -> InferenceResult<f64> {
    if rule.antecedents().is_empty() {
        return Err(InferenceError::MalformedRule {
            rule: rule.name().to_string(),
            reason: "rule has no antecedents".to_string(),
        });
    }

    let mut strength = 1.0_f64;
    for clause in rule.antecedents() {
        let set = catalogue
            .input_set(clause)
            .ok_or_else(|| InferenceError::MalformedRule {
                rule: rule.name().to_string(),
                reason: format!("antecedent {clause} is not an input-variable set"),
            })?;
        let index = data.get(clause.variable()).copied().ok_or_else(|| {
            InferenceError::MissingVariable {
                variable: clause.variable().to_string(),
            }
        })?;
        strength = strength.min(set.degree_at(index));
    }
    Ok(strength)
}

/// Evaluate all rules and reduce strengths per consequent.
pub fn evaluate(
    rules: &RuleList,
    data: &HashMap<&str, i64>,
    catalogue: &FuzzySetCatalogue,
) -> InferenceResult<AntecedentOutcome> {
    let mut similarities: BTreeMap<SetKey, f64> =
        catalogue.risk_keys().map(|k| (k.clone(), 0.0)).collect();
    let mut strengths = Vec::with_capacity(rules.len());

    for rule in rules {
        let strength = rule_strength(rule, data, catalogue)?;
        let Some(similarity) = similarities.get_mut(rule.consequent()) else {
            return Err(InferenceError::MalformedRule {
                rule: rule.name().to_string(),
                reason: format!("consequent {} is not a risk set", rule.consequent()),
            });
        };
        if strength > 0.0 {
            debug!(rule = rule.name(), strength, consequent = %rule.consequent(), "rule fired");
            *similarity = similarity.max(strength);
        }
        strengths.push(strength);
    }

    Ok(AntecedentOutcome {
        similarities,
        firings: RuleFirings::new(strengths),
    })
}
