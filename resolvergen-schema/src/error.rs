//! Error types for loading and analysing schema descriptions.

use thiserror::Error;

/// Error type for loading a schema description.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema analysis.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// An object type references an input type missing from the input index.
    #[error("input type '{name}' referenced by '{object}' not found")]
    InputTypeNotFound {
        /// Input type name.
        name: String,
        /// Referencing object type name.
        object: String,
    },
}

impl SchemaError {
    /// Creates an input-type-not-found error.
    pub fn input_not_found(name: impl Into<String>, object: impl Into<String>) -> Self {
        Self::InputTypeNotFound {
            name: name.into(),
            object: object.into(),
        }
    }
}
