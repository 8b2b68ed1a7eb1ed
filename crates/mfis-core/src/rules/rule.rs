use std::fmt;

use serde::Serialize;

use crate::errors::{InferenceError, InferenceResult};
use crate::fuzzy::SetKey;

/// One linguistic rule: `IF a1 AND a2 AND ... THEN consequent`.
///
/// Rules carry no evaluation state. Firing strengths are produced per
/// inference call and returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    name: String,
    antecedents: Vec<SetKey>,
    consequent: SetKey,
}

impl Rule {
    /// Build a rule. A rule without antecedents is rejected.
    pub fn new(
        name: impl Into<String>,
        antecedents: Vec<SetKey>,
        consequent: SetKey,
    ) -> InferenceResult<Self> {
        let name = name.into();
        if antecedents.is_empty() {
            return Err(InferenceError::MalformedRule {
                rule: name,
                reason: "rule has no antecedents".to_string(),
            });
        }
        Ok(Self {
            name,
            antecedents,
            consequent,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn antecedents(&self) -> &[SetKey] {
        &self.antecedents
    }

    pub fn consequent(&self) -> &SetKey {
        &self.consequent
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: IF ", self.name)?;
        for (i, clause) in self.antecedents.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{clause}")?;
        }
        write!(f, " THEN {}", self.consequent)
    }
}
