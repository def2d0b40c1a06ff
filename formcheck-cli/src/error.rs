//! CLI error types

use std::path::PathBuf;

use formcheck::BindError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid form document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule '{rule}' is not available for {kind} field '{field}'")]
    UnsupportedRule {
        field: String,
        kind: &'static str,
        rule: &'static str,
    },

    #[error("Invalid value {value} for rule '{rule}' on field '{field}': expected a whole count")]
    InvalidValue {
        field: String,
        rule: &'static str,
        value: f64,
    },
}
