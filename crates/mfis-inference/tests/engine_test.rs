use std::sync::Arc;

use mfis_core::config::{BatchConfig, InferenceConfig};
use mfis_core::traits::IInferenceEngine;
use mfis_core::{
    ConsequentMethod, DefuzzMethod, FuzzySetCatalogue, GridPolicy, InferenceError, MfisError,
    RuleList,
};
use mfis_inference::InferenceEngine;
use test_fixtures::{application, credit_catalogue, credit_rules, index_set, key, rule};

fn engine_with(defuzz: DefuzzMethod) -> InferenceEngine {
    let config = InferenceConfig {
        defuzzification: defuzz,
        ..InferenceConfig::default()
    };
    InferenceEngine::new(credit_catalogue(), credit_rules(), config).unwrap()
}

fn inference_error(err: MfisError) -> InferenceError {
    match err {
        MfisError::InferenceError(e) => e,
        other => panic!("expected inference error, got {other}"),
    }
}

// ── Single inference ────────────────────────────────────────────────────

#[test]
fn young_low_income_applicant_is_high_risk() {
    // Age=2 → Young .5; Income=1 → Low .6; R1 fires at .5.
    let app = application("A1", &[("Age", 2), ("Income", 1)]);
    let engine = engine_with(DefuzzMethod::Centroid);

    let trace = engine.infer_traced(&app).unwrap();
    assert_eq!(trace.similarities[&key("Risk=HighR")], 0.5);
    assert_eq!(trace.similarities[&key("Risk=LowR")], 0.0);
    assert_eq!(trace.similarities[&key("Risk=MediumR")], 0.0);
    assert_eq!(trace.firings.fired_indices(), vec![0]);
    assert_eq!(trace.crisp, 9.5);

    assert_eq!(engine_with(DefuzzMethod::Bisector).infer(&app).unwrap(), 9.0);
    assert_eq!(engine_with(DefuzzMethod::MeanOfMaximum).infer(&app).unwrap(), 9.5);
    assert_eq!(engine_with(DefuzzMethod::SmallestOfMaximum).infer(&app).unwrap(), 9.0);
    assert_eq!(engine_with(DefuzzMethod::LargestOfMaximum).infer(&app).unwrap(), 10.0);
}

#[test]
fn out_of_range_values_are_clamped() {
    // Age=-3 → index 0 (Young 1, Elder 0); Income=99 → index 4 (Low 0, High 1).
    let app = application("A2", &[("Age", -3), ("Income", 99)]);
    let trace = engine_with(DefuzzMethod::Centroid).infer_traced(&app).unwrap();
    assert_eq!(trace.similarities[&key("Risk=MediumR")], 1.0);
    assert_eq!(trace.firings.fired_indices(), vec![2]);
    assert_eq!(trace.crisp, 3.0);
}

#[test]
fn scale_consequent_keeps_shape() {
    let config = InferenceConfig {
        consequent_method: ConsequentMethod::Scale,
        ..InferenceConfig::default()
    };
    let engine = InferenceEngine::new(credit_catalogue(), credit_rules(), config).unwrap();
    let app = application("A1", &[("Age", 2), ("Income", 1)]);
    let trace = engine.infer_traced(&app).unwrap();
    let high = trace
        .qualified
        .iter()
        .find(|s| s.key() == &key("Risk=HighR"))
        .unwrap();
    assert_eq!(high.y()[9], 0.25);
    assert_eq!(high.y()[10], 0.5);
}

#[test]
fn no_rule_firing_is_empty_aggregate() {
    // Age=4 → Young 0; Income=0 → High 0.
    let app = application("A3", &[("Age", 4), ("Income", 0)]);
    let err = engine_with(DefuzzMethod::Centroid).infer(&app).unwrap_err();
    assert_eq!(inference_error(err), InferenceError::EmptyAggregate);
}

#[test]
fn missing_variable_is_reported() {
    let app = application("A4", &[("Age", 2)]);
    let err = engine_with(DefuzzMethod::Centroid).infer(&app).unwrap_err();
    assert_eq!(
        inference_error(err),
        InferenceError::MissingVariable {
            variable: "Income".to_string()
        }
    );
}

#[test]
fn catalogue_is_not_mutated_by_inference() {
    let engine = engine_with(DefuzzMethod::Centroid);
    let before: Vec<_> = engine.catalogue().risk_sets().cloned().collect();
    engine
        .infer(&application("A1", &[("Age", 2), ("Income", 1)]))
        .unwrap();
    let after: Vec<_> = engine.catalogue().risk_sets().cloned().collect();
    assert_eq!(before, after);
}

// ── Construction-time validation ────────────────────────────────────────

#[test]
fn rule_with_unknown_antecedent_is_malformed() {
    let rules = RuleList::new(vec![rule("R1", &["Age=Teen"], "Risk=HighR")]);
    let err = InferenceEngine::new(credit_catalogue(), rules, InferenceConfig::default())
        .unwrap_err();
    assert!(matches!(
        inference_error(err),
        InferenceError::MalformedRule { ref rule, .. } if rule == "R1"
    ));
}

#[test]
fn rule_with_non_risk_consequent_is_malformed() {
    let rules = RuleList::new(vec![rule("R1", &["Age=Young"], "Income=High")]);
    let err = InferenceEngine::new(credit_catalogue(), rules, InferenceConfig::default())
        .unwrap_err();
    assert!(matches!(inference_error(err), InferenceError::MalformedRule { .. }));
}

#[test]
fn rule_with_risk_antecedent_is_malformed() {
    let rules = RuleList::new(vec![rule("R1", &["Age=Young", "Risk=HighR"], "Risk=LowR")]);
    let err = InferenceEngine::new(credit_catalogue(), rules, InferenceConfig::default())
        .unwrap_err();
    match inference_error(err) {
        InferenceError::MalformedRule { rule, reason } => {
            assert_eq!(rule, "R1");
            assert!(reason.contains("Risk=HighR"));
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn mismatched_risk_grids_rejected_under_strict_policy() {
    let mut catalogue = credit_catalogue();
    catalogue.insert_risk(index_set("Risk=ExtremeR", &[0.0, 0.5, 1.0]));
    let err = InferenceEngine::new(catalogue.clone(), credit_rules(), InferenceConfig::default())
        .unwrap_err();
    assert!(matches!(
        inference_error(err),
        InferenceError::InconsistentGrid { .. }
    ));

    let config = InferenceConfig {
        grid_policy: GridPolicy::Interpolate,
        ..InferenceConfig::default()
    };
    assert!(InferenceEngine::new(catalogue, credit_rules(), config).is_ok());
}

#[test]
fn empty_risk_partition_is_rejected() {
    let err = InferenceEngine::new(
        FuzzySetCatalogue::new(),
        RuleList::default(),
        InferenceConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        inference_error(err),
        InferenceError::InconsistentGrid { .. }
    ));
}

#[test]
fn risk_sets_must_use_the_configured_variable() {
    let config = InferenceConfig {
        risk_variable: "Score".to_string(),
        ..InferenceConfig::default()
    };
    let err = InferenceEngine::new(credit_catalogue(), credit_rules(), config).unwrap_err();
    assert!(matches!(err, MfisError::ConfigError(_)));
}

// ── Batch ───────────────────────────────────────────────────────────────

fn batch_apps() -> Vec<mfis_core::Application> {
    vec![
        application("A1", &[("Age", 2), ("Income", 1)]),
        application("A2", &[("Age", -3), ("Income", 99)]),
        application("A3", &[("Age", 4), ("Income", 0)]),
        application("A4", &[("Age", 2)]),
        application("A5", &[("Age", 3), ("Income", 4)]),
    ]
}

#[test]
fn batch_continues_past_failures() {
    let engine = engine_with(DefuzzMethod::Centroid);
    let report = engine.process_batch(&batch_apps(), &BatchConfig::default());

    let ids: Vec<_> = report
        .outcomes
        .iter()
        .map(|o| o.application_id.as_str())
        .collect();
    assert_eq!(ids, vec!["A1", "A2", "A3", "A4", "A5"]);
    assert_eq!(report.succeeded(), 3);
    assert_eq!(report.failed(), 2);
    assert_eq!(
        report.outcomes[2].result,
        Err(InferenceError::EmptyAggregate)
    );
    assert!(matches!(
        report.outcomes[3].result,
        Err(InferenceError::MissingVariable { .. })
    ));
}

#[test]
fn batch_counts_rule_usage() {
    let engine = engine_with(DefuzzMethod::Centroid);
    let report = engine.process_batch(&batch_apps(), &BatchConfig::default());
    // A1 fires R1; A2 fires R3; A5 (Elder 1, High 1) fires R2 and R3.
    assert_eq!(report.usage.counts(), &[1, 1, 2]);
    assert!(report.usage.never_used().is_empty());
    assert_eq!(report.usage.used_more_than(1), vec![(2, 2)]);
}

#[test]
fn batch_counts_rules_fired_by_failing_applications() {
    // NoneR is zero everywhere: R1 fires at 1.0 but the aggregate has no area.
    let mut catalogue = FuzzySetCatalogue::new();
    catalogue.insert_risk(index_set("Risk=LowR", &[1.0, 0.0, 0.0]));
    catalogue.insert_risk(index_set("Risk=NoneR", &[0.0, 0.0, 0.0]));
    catalogue.insert_input(index_set("Age=Young", &[1.0, 0.5, 0.0]));
    let rules = RuleList::new(vec![rule("R1", &["Age=Young"], "Risk=NoneR")]);
    let engine = InferenceEngine::new(catalogue, rules, InferenceConfig::default()).unwrap();

    let report = engine.process_batch(&[application("A1", &[("Age", 0)])], &BatchConfig::default());
    assert_eq!(report.outcomes[0].result, Err(InferenceError::EmptyAggregate));
    assert_eq!(report.usage.counts(), &[1]);
    assert!(report.usage.never_used().is_empty());
}

#[test]
fn parallel_and_serial_batches_agree() {
    let engine = engine_with(DefuzzMethod::Bisector);
    let apps = batch_apps();
    let parallel = engine.process_batch(&apps, &BatchConfig { parallel: true, ..Default::default() });
    let serial = engine.process_batch(&apps, &BatchConfig { parallel: false, ..Default::default() });
    assert_eq!(parallel, serial);
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(engine_with(DefuzzMethod::Centroid));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                engine
                    .infer(&application("A1", &[("Age", 2), ("Income", 1)]))
                    .unwrap()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 9.5);
    }
}

#[test]
fn with_config_reuses_shared_data() {
    let engine = engine_with(DefuzzMethod::Centroid);
    let som = engine
        .with_config(InferenceConfig {
            defuzzification: DefuzzMethod::SmallestOfMaximum,
            ..InferenceConfig::default()
        })
        .unwrap();
    let app = application("A1", &[("Age", 2), ("Income", 1)]);
    assert_eq!(som.infer(&app).unwrap(), 9.0);
    assert_eq!(som.rules().len(), engine.rules().len());
}

#[test]
fn trace_serializes_to_json() {
    let trace = engine_with(DefuzzMethod::Centroid)
        .infer_traced(&application("A1", &[("Age", 2), ("Income", 1)]))
        .unwrap();
    let json = trace.to_json().unwrap();
    assert!(json.contains("\"application_id\": \"A1\""));
    assert!(json.contains("Risk=HighR"));
}
