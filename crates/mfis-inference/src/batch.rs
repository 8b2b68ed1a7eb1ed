//! Batch evaluation with per-application failure isolation and a final
//! rule-usage reduction.

use mfis_core::models::{ApplicationOutcome, BatchReport, RuleFirings, RuleUsage};
use mfis_core::Application;
use mfis_observability::{batch_span, inference_span};
use mfis_observability::tracing_setup::events;
use rayon::prelude::*;

use crate::engine::InferenceEngine;

/// Evaluate every application; outcomes keep input order.
///
/// With `parallel` the applications run on the rayon pool. Each task returns
/// its own firings, and usage is summed afterwards. An application whose
/// antecedents evaluated still counts its fired rules when qualification,
/// aggregation or defuzzification fails.
pub fn process_batch(
    engine: &InferenceEngine,
    applications: &[Application],
    parallel: bool,
) -> BatchReport {
    let _span = batch_span!(applications.len()).entered();
    let evaluate = |app: &Application| -> (ApplicationOutcome, Option<RuleFirings>) {
        let _span = inference_span!(app.id).entered();
        // Firings count once antecedents evaluate, even if a later stage fails.
        let (result, firings) = match engine.evaluate_antecedents(app) {
            Ok(outcome) => {
                let firings = outcome.firings.clone();
                let result = engine.complete(app, outcome).map(|trace| trace.crisp);
                (result, Some(firings))
            }
            Err(e) => (Err(e), None),
        };
        if let Err(e) = &result {
            events::application_failed(&app.id, e);
        }
        (
            ApplicationOutcome {
                application_id: app.id.clone(),
                result,
            },
            firings,
        )
    };

    let results: Vec<(ApplicationOutcome, Option<RuleFirings>)> = if parallel {
        applications.par_iter().map(evaluate).collect()
    } else {
        applications.iter().map(evaluate).collect()
    };

    let mut usage = RuleUsage::new(engine.rules().len());
    let mut outcomes = Vec::with_capacity(results.len());
    for (outcome, firings) in results {
        if let Some(firings) = firings {
            usage.record(&firings);
        }
        outcomes.push(outcome);
    }

    let report = BatchReport { outcomes, usage };
    events::batch_completed(&report);
    report
}
