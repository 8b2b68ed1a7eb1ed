//! Application files: `Id, Var, value, Var, value, ...`.

use std::path::Path;

use mfis_core::errors::{LoadError, MfisResult};
use mfis_core::Application;
use mfis_observability::load_span;

use crate::lines::{self, Source};

pub fn parse_applications(content: &str, source: &str) -> Result<Vec<Application>, LoadError> {
    let src = Source { name: source };
    let mut applications = Vec::new();

    for (line, fields) in lines::records(content) {
        let Some((id, pairs)) = fields.split_first().filter(|(id, _)| !id.is_empty()) else {
            return Err(src.error(line, "missing application id"));
        };
        if pairs.len() % 2 != 0 {
            return Err(src.error(line, "expected Var, value pairs after the id"));
        }
        let data = pairs
            .chunks_exact(2)
            .map(|pair| {
                let (variable, value) = (pair[0], pair[1]);
                if variable.is_empty() {
                    return Err(src.error(line, "empty variable name"));
                }
                Ok((variable.to_string(), src.integer(line, variable, value)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        applications.push(Application::new(*id, data));
    }
    Ok(applications)
}

/// Read and parse an application file.
pub fn load_applications(path: impl AsRef<Path>) -> MfisResult<Vec<Application>> {
    let path = path.as_ref();
    let _span = load_span!(path.display()).entered();
    let content = lines::read(path)?;
    Ok(parse_applications(&content, &path.display().to_string())?)
}
