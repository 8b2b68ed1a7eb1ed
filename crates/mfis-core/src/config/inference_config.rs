use serde::{Deserialize, Serialize};

use super::defaults;
use crate::methods::{ConsequentMethod, DefuzzMethod, GridPolicy};

/// Method selection for one inference run.
///
/// Method names accept every synonym their `FromStr` accepts, e.g.
/// `defuzzification = "centroid of area"` or `"COA"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub consequent_method: ConsequentMethod,
    pub defuzzification: DefuzzMethod,
    pub grid_policy: GridPolicy,
    /// Variable name of the consequent universe.
    pub risk_variable: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            consequent_method: ConsequentMethod::default(),
            defuzzification: DefuzzMethod::default(),
            grid_policy: GridPolicy::default(),
            risk_variable: defaults::DEFAULT_RISK_VARIABLE.to_string(),
        }
    }
}
