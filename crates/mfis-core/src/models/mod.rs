mod batch_report;
mod inference_trace;
mod rule_firings;
mod rule_usage;

pub use batch_report::{ApplicationOutcome, BatchReport, OutcomeSummary};
pub use inference_trace::InferenceTrace;
pub use rule_firings::RuleFirings;
pub use rule_usage::RuleUsage;
