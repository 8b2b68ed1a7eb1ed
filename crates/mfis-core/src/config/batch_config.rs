use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Evaluate applications on the rayon pool.
    pub parallel: bool,
    /// Rules fired by more than this many applications are reported as heavily used.
    pub usage_threshold: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_PARALLEL,
            usage_threshold: defaults::DEFAULT_USAGE_THRESHOLD,
        }
    }
}
