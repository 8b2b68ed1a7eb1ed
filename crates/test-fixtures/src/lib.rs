//! Shared builders and fixture-file locator for tests across the workspace.

use std::path::PathBuf;

use mfis_core::{Application, FuzzySet, FuzzySetCatalogue, Rule, RuleList, SetKey};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("mfis").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn read_fixture(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Parse a `variable=label` key.
pub fn key(s: &str) -> SetKey {
    s.parse()
        .unwrap_or_else(|e| panic!("bad key {s:?}: {e}"))
}

/// A set sampled on the integer grid `0..y.len()`.
pub fn index_set(k: &str, y: &[f64]) -> FuzzySet {
    let x = (0..y.len()).map(|i| i as f64).collect();
    FuzzySet::new(key(k), x, y.to_vec()).unwrap_or_else(|e| panic!("bad set {k}: {e}"))
}

pub const LOW_RISK: [f64; 11] = [1.0, 1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
pub const MEDIUM_RISK: [f64; 11] = [0.0, 0.0, 0.5, 1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
pub const HIGH_RISK: [f64; 11] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 1.0];

/// Risk universe `x = 0..=10` with low / medium / high sets.
pub fn risk_catalogue() -> FuzzySetCatalogue {
    let mut catalogue = FuzzySetCatalogue::new();
    catalogue.insert_risk(index_set("Risk=LowR", &LOW_RISK));
    catalogue.insert_risk(index_set("Risk=MediumR", &MEDIUM_RISK));
    catalogue.insert_risk(index_set("Risk=HighR", &HIGH_RISK));
    catalogue
}

/// Risk sets plus two small input variables, Age and Income, on `0..=4`.
pub fn credit_catalogue() -> FuzzySetCatalogue {
    let mut catalogue = risk_catalogue();
    catalogue.insert_input(index_set("Age=Young", &[1.0, 1.0, 0.5, 0.0, 0.0]));
    catalogue.insert_input(index_set("Age=Elder", &[0.0, 0.0, 0.5, 1.0, 1.0]));
    catalogue.insert_input(index_set("Income=Low", &[1.0, 0.6, 0.2, 0.0, 0.0]));
    catalogue.insert_input(index_set("Income=High", &[0.0, 0.0, 0.2, 0.6, 1.0]));
    catalogue
}

pub fn rule(name: &str, antecedents: &[&str], consequent: &str) -> Rule {
    Rule::new(
        name,
        antecedents.iter().map(|a| key(a)).collect(),
        key(consequent),
    )
    .unwrap_or_else(|e| panic!("bad rule {name}: {e}"))
}

/// R1: young and low income → high risk.
/// R2: elder and high income → low risk.
/// R3: high income → medium risk.
pub fn credit_rules() -> RuleList {
    RuleList::new(vec![
        rule("R1", &["Age=Young", "Income=Low"], "Risk=HighR"),
        rule("R2", &["Age=Elder", "Income=High"], "Risk=LowR"),
        rule("R3", &["Income=High"], "Risk=MediumR"),
    ])
}

pub fn application(id: &str, data: &[(&str, i64)]) -> Application {
    Application::new(
        id,
        data.iter().map(|(v, x)| (v.to_string(), *x)).collect(),
    )
}
