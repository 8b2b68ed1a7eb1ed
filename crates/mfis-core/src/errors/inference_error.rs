/// Inference pipeline errors.
///
/// All of these are structural: evaluation is deterministic, so none of them
/// can be cleared by retrying with the same input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("malformed rule {rule}: {reason}")]
    MalformedRule { rule: String, reason: String },

    #[error("application has no value for variable {variable}")]
    MissingVariable { variable: String },

    #[error("aggregate set has zero area")]
    EmptyAggregate,

    #[error("unknown {kind} method: {name:?}")]
    UnknownMethod { kind: String, name: String },

    #[error("no risk set {key} in the catalogue")]
    UnknownRiskSet { key: String },

    #[error("inconsistent grid: {reason}")]
    InconsistentGrid { reason: String },

    #[error("invalid membership curve: {reason}")]
    InvalidCurve { reason: String },

    #[error("invalid fuzzy set {key}: {reason}")]
    InvalidFuzzySet { key: String, reason: String },
}
