//! # mfis-inference
//!
//! Mamdani fuzzy inference over discretized membership functions.
//! Pipeline: antecedent evaluation (min / max) → consequent truth
//! qualification (clip or scale) → aggregation (pointwise max) →
//! defuzzification (COA, BOA, MOM, SOM, LOM).
//! Per-call state is returned, never stored, so one engine serves any
//! number of threads.

pub mod aggregation;
pub mod antecedent;
pub mod batch;
pub mod consequent;
pub mod defuzzify;
pub mod engine;

pub use antecedent::AntecedentOutcome;
pub use engine::InferenceEngine;
