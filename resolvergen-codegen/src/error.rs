//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema description loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] resolvergen_schema::ParseError),

    /// Schema analysis error.
    #[error("schema error: {0}")]
    Schema(#[from] resolvergen_schema::SchemaError),

    /// Configuration decoding error.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
