//! Span definitions per operation: inference, batch, load.

/// Create a span for inferring one application.
#[macro_export]
macro_rules! inference_span {
    ($application_id:expr) => {
        tracing::debug_span!("mfis.inference", application = %$application_id)
    };
}

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($count:expr) => {
        tracing::info_span!("mfis.batch", applications = $count)
    };
}

/// Create a span for loading one input file.
#[macro_export]
macro_rules! load_span {
    ($path:expr) => {
        tracing::info_span!("mfis.load", path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INFERENCE: &str = "mfis.inference";
    pub const BATCH: &str = "mfis.batch";
    pub const LOAD: &str = "mfis.load";
}
