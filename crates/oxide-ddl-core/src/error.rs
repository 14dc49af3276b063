//! Error types for schema synthesis.

/// Errors that can occur while synthesizing DDL/DCL.
///
/// Bad table input never surfaces here: empty names, unknown types and
/// empty defaults degrade to placeholders or pass-through rendering.
#[derive(Debug, thiserror::Error)]
pub enum DdlError {
    /// No strategy is registered for the requested dialect.
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// A table definition could not be deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error while reading a table definition.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for schema synthesis.
pub type Result<T> = std::result::Result<T, DdlError>;
