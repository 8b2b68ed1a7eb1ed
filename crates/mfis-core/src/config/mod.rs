pub mod batch_config;
pub mod defaults;
pub mod inference_config;
pub mod loader_config;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use batch_config::BatchConfig;
pub use inference_config::InferenceConfig;
pub use loader_config::LoaderConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{ConfigError, LoadError, MfisResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MfisConfig {
    pub inference: InferenceConfig,
    pub batch: BatchConfig,
    pub loader: LoaderConfig,
    pub observability: ObservabilityConfig,
}

impl MfisConfig {
    /// Load config from a TOML string. Missing fields use defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> MfisResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_toml(&content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.inference.risk_variable.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "inference.risk_variable".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid {
                field: "observability.log_level".to_string(),
                reason: format!("expected one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
