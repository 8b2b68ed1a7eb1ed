//! InferenceEngine: validated, shareable facade over the pipeline.

use std::sync::Arc;

use mfis_core::config::{BatchConfig, InferenceConfig};
use mfis_core::errors::{ConfigError, InferenceError, InferenceResult, MfisResult};
use mfis_core::models::{BatchReport, InferenceTrace};
use mfis_core::traits::IInferenceEngine;
use mfis_core::{Application, FuzzySetCatalogue, GridPolicy, RuleList};
use mfis_observability::inference_span;
use tracing::debug;

use crate::antecedent::AntecedentOutcome;
use crate::{aggregation, antecedent, batch, consequent, defuzzify};

/// Mamdani inference engine.
///
/// Catalogue and rules are shared read-only through `Arc`; every call
/// allocates its own similarity map, firing strengths, and qualified sets,
/// so one engine can serve any number of threads without locking.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    catalogue: Arc<FuzzySetCatalogue>,
    rules: Arc<RuleList>,
    config: InferenceConfig,
}

impl InferenceEngine {
    /// Validate the rule list and risk grids once, then build the engine.
    pub fn new(
        catalogue: FuzzySetCatalogue,
        rules: RuleList,
        config: InferenceConfig,
    ) -> MfisResult<Self> {
        Self::from_shared(Arc::new(catalogue), Arc::new(rules), config)
    }

    /// Build from already-shared catalogue and rules.
    pub fn from_shared(
        catalogue: Arc<FuzzySetCatalogue>,
        rules: Arc<RuleList>,
        config: InferenceConfig,
    ) -> MfisResult<Self> {
        validate_risk_sets(&catalogue, &config)?;
        validate_rules(&rules, &catalogue)?;
        Ok(Self {
            catalogue,
            rules,
            config,
        })
    }

    /// Same catalogue and rules under a different method selection.
    pub fn with_config(&self, config: InferenceConfig) -> MfisResult<Self> {
        Self::from_shared(self.catalogue.clone(), self.rules.clone(), config)
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &FuzzySetCatalogue {
        &self.catalogue
    }

    pub fn rules(&self) -> &RuleList {
        &self.rules
    }

    /// Run the full pipeline for one application.
    pub fn run(&self, application: &Application) -> InferenceResult<InferenceTrace> {
        let _span = inference_span!(application.id).entered();
        let outcome = self.evaluate_antecedents(application)?;
        self.complete(application, outcome)
    }

    /// Rule strengths and per-consequent similarities for one application.
    pub fn evaluate_antecedents(
        &self,
        application: &Application,
    ) -> InferenceResult<AntecedentOutcome> {
        let data = application.data_map();
        antecedent::evaluate(&self.rules, &data, &self.catalogue)
    }

    /// Qualify, aggregate and defuzzify an evaluated antecedent outcome.
    pub fn complete(
        &self,
        application: &Application,
        outcome: AntecedentOutcome,
    ) -> InferenceResult<InferenceTrace> {
        let qualified = consequent::build(
            &outcome.similarities,
            &self.catalogue,
            self.config.consequent_method,
        )?;
        let aggregate =
            aggregation::aggregate(qualified.iter().map(|s| s.curve()), self.config.grid_policy)?;
        let crisp = defuzzify::defuzzify(&aggregate, self.config.defuzzification)?;

        debug!(
            application = %application.id,
            fired = outcome.firings.fired_indices().len(),
            crisp,
            "inference complete"
        );

        Ok(InferenceTrace {
            application_id: application.id.clone(),
            similarities: outcome.similarities,
            firings: outcome.firings,
            qualified,
            aggregate,
            crisp,
        })
    }

    /// Evaluate a batch. One failing application never stops the others.
    pub fn process_batch(&self, applications: &[Application], config: &BatchConfig) -> BatchReport {
        batch::process_batch(self, applications, config.parallel)
    }
}

impl IInferenceEngine for InferenceEngine {
    fn infer(&self, application: &Application) -> MfisResult<f64> {
        Ok(self.run(application)?.crisp)
    }

    fn infer_traced(&self, application: &Application) -> MfisResult<InferenceTrace> {
        Ok(self.run(application)?)
    }
}

fn validate_risk_sets(catalogue: &FuzzySetCatalogue, config: &InferenceConfig) -> MfisResult<()> {
    let mut sets = catalogue.risk_sets();
    let Some(first) = sets.next() else {
        return Err(InferenceError::InconsistentGrid {
            reason: "catalogue has no risk sets".to_string(),
        }
        .into());
    };

    for set in catalogue.risk_sets() {
        if set.variable() != config.risk_variable {
            return Err(ConfigError::Invalid {
                field: "inference.risk_variable".to_string(),
                reason: format!(
                    "risk set {} does not belong to variable {}",
                    set.key(),
                    config.risk_variable
                ),
            }
            .into());
        }
    }

    if config.grid_policy == GridPolicy::Strict {
        if let Some(odd) = sets.find(|s| !s.curve().same_grid(first.curve())) {
            return Err(InferenceError::InconsistentGrid {
                reason: format!("{} and {} are sampled on different grids", first.key(), odd.key()),
            }
            .into());
        }
    }
    Ok(())
}

fn validate_rules(rules: &RuleList, catalogue: &FuzzySetCatalogue) -> InferenceResult<()> {
    for rule in rules {
        let malformed = |reason: String| InferenceError::MalformedRule {
            rule: rule.name().to_string(),
            reason,
        };
        if rule.antecedents().is_empty() {
            return Err(malformed("rule has no antecedents".to_string()));
        }
        for clause in rule.antecedents() {
            if catalogue.is_risk(clause) {
                return Err(malformed(format!("antecedent {clause} is a risk set")));
            }
            if catalogue.input_set(clause).is_none() {
                return Err(malformed(format!("antecedent {clause} is not in the catalogue")));
            }
        }
        if !catalogue.is_risk(rule.consequent()) {
            return Err(malformed(format!(
                "consequent {} is not a risk set",
                rule.consequent()
            )));
        }
    }
    Ok(())
}
