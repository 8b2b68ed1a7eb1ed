use serde::Serialize;

use super::RuleUsage;
use crate::errors::InferenceError;

/// Result for one application in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationOutcome {
    pub application_id: String,
    pub result: Result<f64, InferenceError>,
}

impl ApplicationOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes in input order plus merged rule usage.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<ApplicationOutcome>,
    pub usage: RuleUsage,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &InferenceError)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            Ok(_) => None,
            Err(e) => Some((o.application_id.as_str(), e)),
        })
    }
}

/// Serializable summary: crisp values and error messages as strings.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeSummary<'a> {
    pub application_id: &'a str,
    pub risk: Option<f64>,
    pub error: Option<String>,
}

impl<'a> From<&'a ApplicationOutcome> for OutcomeSummary<'a> {
    fn from(outcome: &'a ApplicationOutcome) -> Self {
        match &outcome.result {
            Ok(v) => Self {
                application_id: &outcome.application_id,
                risk: Some(*v),
                error: None,
            },
            Err(e) => Self {
                application_id: &outcome.application_id,
                risk: None,
                error: Some(e.to_string()),
            },
        }
    }
}
