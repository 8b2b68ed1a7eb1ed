use std::collections::BTreeMap;

use serde::Serialize;

use super::RuleFirings;
use crate::fuzzy::{FuzzySet, MembershipCurve, SetKey};

/// Every intermediate of one inference, for plotting and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceTrace {
    pub application_id: String,
    /// Risk key → similarity degree.
    pub similarities: BTreeMap<SetKey, f64>,
    pub firings: RuleFirings,
    /// Truth-qualified risk sets, in risk-key order.
    pub qualified: Vec<FuzzySet>,
    pub aggregate: MembershipCurve,
    pub crisp: f64,
}

impl InferenceTrace {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
