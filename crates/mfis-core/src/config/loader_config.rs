use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Input and output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub risk_sets_path: String,
    pub input_sets_path: String,
    pub rules_path: String,
    pub applications_path: String,
    pub results_path: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            risk_sets_path: defaults::DEFAULT_RISK_SETS_PATH.to_string(),
            input_sets_path: defaults::DEFAULT_INPUT_SETS_PATH.to_string(),
            rules_path: defaults::DEFAULT_RULES_PATH.to_string(),
            applications_path: defaults::DEFAULT_APPLICATIONS_PATH.to_string(),
            results_path: defaults::DEFAULT_RESULTS_PATH.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Resolve every relative path against `base`. Absolute paths are kept.
    pub fn relative_to(&self, base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let resolve = |p: &str| {
            if Path::new(p).is_absolute() {
                p.to_string()
            } else {
                base.join(p).display().to_string()
            }
        };
        Self {
            risk_sets_path: resolve(&self.risk_sets_path),
            input_sets_path: resolve(&self.input_sets_path),
            rules_path: resolve(&self.rules_path),
            applications_path: resolve(&self.applications_path),
            results_path: resolve(&self.results_path),
        }
    }
}
