//! Structured log events for batch outcomes and rule-usage diagnostics.
//!
//! Each function emits a `tracing` event with structured fields.

use mfis_core::models::{BatchReport, RuleUsage};
use mfis_core::{InferenceError, RuleList};

/// Log a failed application. The batch continues.
pub fn application_failed(application_id: &str, error: &InferenceError) {
    tracing::warn!(
        event = "application_failed",
        application = %application_id,
        error = %error,
        "inference failed"
    );
}

/// Log a batch completion event.
pub fn batch_completed(report: &BatchReport) {
    tracing::info!(
        event = "batch_completed",
        applications = report.outcomes.len(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        total_firings = report.usage.total_firings(),
        "batch complete"
    );
}

/// Rule names with their application counts, for rules fired by more than `threshold` applications.
pub fn heavily_used(usage: &RuleUsage, rules: &RuleList, threshold: u64) -> Vec<(String, u64)> {
    usage
        .used_more_than(threshold)
        .into_iter()
        .filter_map(|(i, count)| rules.get(i).map(|r| (r.name().to_string(), count)))
        .collect()
}

/// Names of rules no application fired.
pub fn never_used(usage: &RuleUsage, rules: &RuleList) -> Vec<String> {
    usage
        .never_used()
        .into_iter()
        .filter_map(|i| rules.get(i).map(|r| r.name().to_string()))
        .collect()
}

/// Log the rule-usage report: rules never fired and rules fired by more than `threshold` applications.
pub fn rule_usage_reported(usage: &RuleUsage, rules: &RuleList, threshold: u64) {
    let unused = never_used(usage, rules);
    let heavy = heavily_used(usage, rules, threshold);
    if !unused.is_empty() {
        tracing::warn!(
            event = "rules_never_used",
            rules = ?unused,
            "rules never fired"
        );
    }
    tracing::info!(
        event = "rules_heavily_used",
        threshold = threshold,
        rules = ?heavy,
        "rule usage"
    );
}
