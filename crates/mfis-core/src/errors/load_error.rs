/// Loader errors for the fuzzy-set, rule, and application text files.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("io error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("{path}:{line}: {reason}")]
    Parse {
        path: String,
        line: usize,
        reason: String,
    },
}
