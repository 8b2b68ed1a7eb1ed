use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InferenceError;

/// Composite `variable=label` key, e.g. `Age=Young` or `Risk=HighR`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SetKey {
    variable: String,
    label: String,
}

impl SetKey {
    pub fn new(variable: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            label: label.into(),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for SetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.variable, self.label)
    }
}

impl FromStr for SetKey {
    type Err = InferenceError;

    /// Parse `variable=label`. Both halves are trimmed and must be non-empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| InferenceError::InvalidFuzzySet {
            key: s.to_string(),
            reason: reason.to_string(),
        };
        let (variable, label) = s.split_once('=').ok_or_else(|| invalid("expected variable=label"))?;
        let (variable, label) = (variable.trim(), label.trim());
        if variable.is_empty() || label.is_empty() {
            return Err(invalid("variable and label must be non-empty"));
        }
        if label.contains('=') {
            return Err(invalid("label must not contain '='"));
        }
        Ok(Self::new(variable, label))
    }
}

impl TryFrom<String> for SetKey {
    type Error = InferenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SetKey> for String {
    fn from(key: SetKey) -> Self {
        key.to_string()
    }
}
