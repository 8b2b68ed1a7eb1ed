use serde::Serialize;

/// Per-rule firing strengths from one inference call, aligned with the
/// rule list. Owned by the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleFirings {
    strengths: Vec<f64>,
}

impl RuleFirings {
    pub fn new(strengths: Vec<f64>) -> Self {
        Self { strengths }
    }

    pub fn strength(&self, rule_index: usize) -> Option<f64> {
        self.strengths.get(rule_index).copied()
    }

    pub fn fired(&self, rule_index: usize) -> bool {
        self.strength(rule_index).is_some_and(|s| s > 0.0)
    }

    /// Indices of rules with nonzero strength, ascending.
    pub fn fired_indices(&self) -> Vec<usize> {
        self.strengths
            .iter()
            .enumerate()
            .filter(|(_, &s)| s > 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn strengths(&self) -> &[f64] {
        &self.strengths
    }

    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }
}
