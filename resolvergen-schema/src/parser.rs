//! Loader for serialized generation arguments.
//!
//! The schema parser upstream emits its type description as JSON; this
//! module turns that document back into [`GenerateArgs`].

use crate::error::ParseError;
use crate::types::GenerateArgs;
use std::path::Path;

/// Parses generation arguments from a JSON string.
///
/// # Errors
/// Returns `ParseError` if the document is not valid JSON or does not match
/// the expected shape.
pub fn parse_args(json: &str) -> Result<GenerateArgs, ParseError> {
    let args: GenerateArgs = serde_json::from_str(json)?;
    tracing::debug!(
        types = args.types.len(),
        models = args.model_map.len(),
        "loaded schema description"
    );
    Ok(args)
}

/// Reads and parses generation arguments from a JSON file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_args_file(path: &Path) -> Result<GenerateArgs, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_args(&json)
}
