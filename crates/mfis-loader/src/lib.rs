//! # mfis-loader
//!
//! Readers for the MFIS text formats: fuzzy sets (`Var=Label, xmin, xmax, a, b, c, d`),
//! rules (`Name, Risk=Label, Var=Label, ...`), applications
//! (`Id, Var, value, Var, value, ...`), and the `Id, value` results writer.

pub mod applications;
pub mod fuzzy_sets;
pub mod results;
pub mod rules;

mod lines;

use mfis_core::config::LoaderConfig;
use mfis_core::errors::MfisResult;
use mfis_core::{Application, FuzzySetCatalogue, RuleList};
use tracing::info;

pub use applications::{load_applications, parse_applications};
pub use fuzzy_sets::{load_catalogue, load_fuzzy_sets, parse_fuzzy_sets, trapmf};
pub use results::{format_results, write_results};
pub use rules::{load_rules, parse_rules};

/// Everything an inference batch needs, read from the configured paths.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub catalogue: FuzzySetCatalogue,
    pub rules: RuleList,
    pub applications: Vec<Application>,
}

/// Load the catalogue, rules, and applications named in `config`.
pub fn load_all(config: &LoaderConfig) -> MfisResult<LoadedInputs> {
    let catalogue = load_catalogue(&config.risk_sets_path, &config.input_sets_path)?;
    let rules = load_rules(&config.rules_path)?;
    let applications = load_applications(&config.applications_path)?;
    info!(
        risk_sets = catalogue.risk_len(),
        input_sets = catalogue.input_len(),
        rules = rules.len(),
        applications = applications.len(),
        "inputs loaded"
    );
    Ok(LoadedInputs {
        catalogue,
        rules,
        applications,
    })
}
