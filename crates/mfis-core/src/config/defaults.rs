// Single source of truth for all default values.

// --- Inference ---
pub const DEFAULT_RISK_VARIABLE: &str = "Risk";

// --- Batch ---
pub const DEFAULT_PARALLEL: bool = true;
pub const DEFAULT_USAGE_THRESHOLD: u64 = 3;

// --- Loader ---
pub const DEFAULT_RISK_SETS_PATH: &str = "Risks.txt";
pub const DEFAULT_INPUT_SETS_PATH: &str = "InputVarSets.txt";
pub const DEFAULT_RULES_PATH: &str = "Rules.txt";
pub const DEFAULT_APPLICATIONS_PATH: &str = "Applications.txt";
pub const DEFAULT_RESULTS_PATH: &str = "Results.txt";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_ENV_VAR: &str = "MFIS_LOG";
