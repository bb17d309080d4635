//! Rule-set errors.

use thiserror::Error;

/// Result type alias for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Errors raised while building, editing, or loading coloring rules.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern `{source_text}`: {error}")]
    InvalidPattern {
        source_text: String,
        #[source]
        error: regex::Error,
    },

    #[error("does not contain rules for coloring math")]
    NotARuleSet,

    #[error("unsupported rule set version: {0}")]
    UnsupportedVersion(String),

    #[error("malformed rule set JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field `{field}` expects {expected}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid value for `{field}`: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("no match rule at index {0}")]
    NoSuchMatch(usize),
}
