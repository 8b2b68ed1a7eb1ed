//! Shared line splitting and file reading for the comma-separated formats.

use std::path::Path;

use mfis_core::errors::LoadError;

/// Non-blank lines with their 1-based line numbers, split on commas and trimmed.
pub(crate) fn records(content: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line.split(',').map(str::trim).collect()))
}

pub(crate) fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Builds parse errors for one source.
#[derive(Clone, Copy)]
pub(crate) struct Source<'a> {
    pub(crate) name: &'a str,
}

impl Source<'_> {
    pub(crate) fn error(&self, line: usize, reason: impl Into<String>) -> LoadError {
        LoadError::Parse {
            path: self.name.to_string(),
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn integer(&self, line: usize, field: &str, text: &str) -> Result<i64, LoadError> {
        text.parse()
            .map_err(|_| self.error(line, format!("{field}: expected an integer, got {text:?}")))
    }
}
