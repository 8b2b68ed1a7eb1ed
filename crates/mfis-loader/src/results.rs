//! Results file: one `Id, value` line per application.

use std::fmt::Write as _;
use std::path::Path;

use mfis_core::errors::{LoadError, MfisResult};
use mfis_core::models::ApplicationOutcome;

/// Render outcomes as `Id, 42.17` or `Id, ERROR: <message>`.
pub fn format_results(outcomes: &[ApplicationOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        // Writing into a String cannot fail.
        let _ = match &outcome.result {
            Ok(value) => writeln!(out, "{}, {value:.2}", outcome.application_id),
            Err(e) => writeln!(out, "{}, ERROR: {e}", outcome.application_id),
        };
    }
    out
}

pub fn write_results(path: impl AsRef<Path>, outcomes: &[ApplicationOutcome]) -> MfisResult<()> {
    let path = path.as_ref();
    std::fs::write(path, format_results(outcomes)).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}
