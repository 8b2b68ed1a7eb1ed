use serde::{Deserialize, Serialize};

use super::RuleFirings;

/// How many applications fired each rule.
///
/// Built by reduction: each inference returns its own [`RuleFirings`], and
/// usage from independent runs combines with [`RuleUsage::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleUsage {
    counts: Vec<u64>,
}

impl RuleUsage {
    pub fn new(rule_count: usize) -> Self {
        Self {
            counts: vec![0; rule_count],
        }
    }

    /// Count every rule that fired in one inference.
    pub fn record(&mut self, firings: &RuleFirings) {
        if self.counts.len() < firings.len() {
            self.counts.resize(firings.len(), 0);
        }
        for index in firings.fired_indices() {
            self.counts[index] += 1;
        }
    }

    /// Elementwise sum; the shorter vector is padded with zeros.
    pub fn merge(mut self, other: RuleUsage) -> Self {
        if self.counts.len() < other.counts.len() {
            self.counts.resize(other.counts.len(), 0);
        }
        for (total, count) in self.counts.iter_mut().zip(other.counts) {
            *total += count;
        }
        self
    }

    pub fn count(&self, rule_index: usize) -> u64 {
        self.counts.get(rule_index).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Rules that no application fired.
    pub fn never_used(&self) -> Vec<usize> {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Rules fired by more than `threshold` applications, with their counts.
    pub fn used_more_than(&self, threshold: u64) -> Vec<(usize, u64)> {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > threshold)
            .map(|(i, &c)| (i, c))
            .collect()
    }

    pub fn total_firings(&self) -> u64 {
        self.counts.iter().sum()
    }
}
