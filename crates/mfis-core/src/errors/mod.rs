mod config_error;
mod inference_error;
mod load_error;

pub use config_error::ConfigError;
pub use inference_error::InferenceError;
pub use load_error::LoadError;

/// Top-level error for the fuzzy inference system.
#[derive(Debug, thiserror::Error)]
pub enum MfisError {
    #[error("inference error: {0}")]
    InferenceError(#[from] InferenceError),

    #[error("load error: {0}")]
    LoadError(#[from] LoadError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}

pub type MfisResult<T> = Result<T, MfisError>;

/// Result alias for the per-application inference pipeline.
pub type InferenceResult<T> = Result<T, InferenceError>;
