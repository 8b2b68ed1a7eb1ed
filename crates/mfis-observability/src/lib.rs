//! # mfis-observability
//!
//! Structured tracing for the fuzzy inference system: subscriber setup driven
//! by `MFIS_LOG`, span definitions per operation, and structured log events
//! for batch outcomes and rule-usage diagnostics.

pub mod tracing_setup;

pub use tracing_setup::{init_json_tracing, init_tracing, init_tracing_with_filter};
