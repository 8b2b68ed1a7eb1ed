use crate::application::Application;
use crate::errors::MfisResult;
use crate::models::InferenceTrace;

/// Crisp risk inference for one application.
pub trait IInferenceEngine: Send + Sync {
    /// Infer the crisp risk value for an application.
    fn infer(&self, application: &Application) -> MfisResult<f64>;

    /// Infer and keep every intermediate structure.
    fn infer_traced(&self, application: &Application) -> MfisResult<InferenceTrace>;
}
