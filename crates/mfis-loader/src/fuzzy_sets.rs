//! Fuzzy-set files: `Var=Label, xmin, xmax, a, b, c, d`.
//!
//! Each set is sampled on the integer grid `xmin..xmax` (end exclusive)
//! with a trapezoidal membership function over `a ≤ b ≤ c ≤ d`.

use std::collections::HashSet;
use std::path::Path;

use mfis_core::errors::{LoadError, MfisResult};
use mfis_core::{FuzzySet, FuzzySetCatalogue, SetKey};
use mfis_observability::load_span;
use tracing::debug;

use crate::lines::{self, Source};

/// Trapezoidal membership of `x` for breakpoints `[a, b, c, d]`.
///
/// 0 outside `[a, d]`, linear up on `[a, b)`, 1 on `[b, c]`, linear down on
/// `(c, d]`. A vertical shoulder (`a == b` or `c == d`) has degree 1 at the edge.
pub fn trapmf(x: f64, [a, b, c, d]: [f64; 4]) -> f64 {
    if x < a || x > d {
        0.0
    } else if x < b {
        (x - a) / (b - a)
    } else if x <= c {
        1.0
    } else {
        (d - x) / (d - c)
    }
}

/// Parse a fuzzy-set file. `source` names the input in error messages.
pub fn parse_fuzzy_sets(content: &str, source: &str) -> Result<Vec<FuzzySet>, LoadError> {
    let src = Source { name: source };
    let mut seen = HashSet::new();
    let mut sets = Vec::new();

    for (line, fields) in lines::records(content) {
        if fields.len() != 7 {
            return Err(src.error(
                line,
                format!("expected 7 fields (Var=Label, xmin, xmax, a, b, c, d), got {}", fields.len()),
            ));
        }
        let key: SetKey = fields[0]
            .parse()
            .map_err(|e: mfis_core::InferenceError| src.error(line, e.to_string()))?;

        let mut numbers = [0i64; 6];
        for (slot, (name, text)) in numbers
            .iter_mut()
            .zip(["xmin", "xmax", "a", "b", "c", "d"].into_iter().zip(&fields[1..]))
        {
            *slot = src.integer(line, name, text)?;
        }
        let [xmin, xmax, a, b, c, d] = numbers;

        if xmax <= xmin {
            return Err(src.error(line, format!("empty domain: xmax {xmax} <= xmin {xmin}")));
        }
        if !(a <= b && b <= c && c <= d) {
            return Err(src.error(
                line,
                format!("breakpoints must satisfy a <= b <= c <= d, got {a}, {b}, {c}, {d}"),
            ));
        }
        if !seen.insert(key.clone()) {
            return Err(src.error(line, format!("duplicate fuzzy set {key}")));
        }

        let corners = [a as f64, b as f64, c as f64, d as f64];
        let x: Vec<f64> = (xmin..xmax).map(|v| v as f64).collect();
        let y = x.iter().map(|&v| trapmf(v, corners)).collect();
        let set = FuzzySet::new(key, x, y).map_err(|e| src.error(line, e.to_string()))?;
        debug!(set = %set, "fuzzy set parsed");
        sets.push(set);
    }
    Ok(sets)
}

/// Read and parse a fuzzy-set file.
pub fn load_fuzzy_sets(path: impl AsRef<Path>) -> MfisResult<Vec<FuzzySet>> {
    let path = path.as_ref();
    let _span = load_span!(path.display()).entered();
    let content = lines::read(path)?;
    Ok(parse_fuzzy_sets(&content, &path.display().to_string())?)
}

/// Build a catalogue from a risk-set file and an input-variable-set file.
pub fn load_catalogue(
    risk_path: impl AsRef<Path>,
    input_path: impl AsRef<Path>,
) -> MfisResult<FuzzySetCatalogue> {
    let mut catalogue = FuzzySetCatalogue::new();
    for set in load_fuzzy_sets(risk_path)? {
        catalogue.insert_risk(set);
    }
    for set in load_fuzzy_sets(input_path)? {
        catalogue.insert_input(set);
    }
    Ok(catalogue)
}
