use thiserror::Error;

/// Crate-level error type.
///
/// Note the split with [`crate::form::ValidationResult`]: a user typing an
/// invalid value is an expected outcome and is reported as a value, never as
/// an error. `PageError` covers the unexpected cases only (host programming
/// errors, malformed schemas, storage faults).
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid validation pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Schema parsing failed: {0}")]
    SchemaParse(String),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Preference storage I/O error: {0}")]
    StoreIo(#[from] std::io::Error),

    #[error("Preference storage format error: {0}")]
    StoreFormat(#[from] serde_json::Error),
}
