//! # mfis-core
//!
//! Foundation crate for the Mamdani fuzzy inference system.
//! Defines the fuzzy-set catalogue, rules, applications, method enums,
//! errors, config, and the engine trait. Every other crate in the workspace
//! depends on this.

pub mod application;
pub mod config;
pub mod errors;
pub mod fuzzy;
pub mod methods;
pub mod models;
pub mod rules;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use application::Application;
pub use config::MfisConfig;
pub use errors::{InferenceError, InferenceResult, MfisError, MfisResult};
pub use fuzzy::{FuzzySet, FuzzySetCatalogue, MembershipCurve, SetKey};
pub use methods::{ConsequentMethod, DefuzzMethod, GridPolicy};
pub use rules::{Rule, RuleList};
