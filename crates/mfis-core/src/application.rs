use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One applicant record: an identifier and `(variable, index)` pairs.
///
/// Values are indices into the discretized domain of the variable's fuzzy
/// sets, not raw quantities. Out-of-range indices are clamped at evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub data: Vec<(String, i64)>,
}

impl Application {
    pub fn new(id: impl Into<String>, data: Vec<(String, i64)>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// First value recorded for `variable`.
    pub fn value_of(&self, variable: &str) -> Option<i64> {
        self.data
            .iter()
            .find(|(name, _)| name == variable)
            .map(|(_, value)| *value)
    }

    /// Variable → index lookup. Later duplicates do not override earlier ones.
    pub fn data_map(&self) -> HashMap<&str, i64> {
        let mut map = HashMap::with_capacity(self.data.len());
        for (name, value) in &self.data {
            map.entry(name.as_str()).or_insert(*value);
        }
        map
    }
}
