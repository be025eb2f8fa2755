//! # Resolvergen Codegen
//!
//! TypeScript resolver typings generated from GraphQL schema descriptions.
//!
//! This crate provides:
//! - Field and argument type printing
//! - Input type and argument bundle declarations
//! - Resolver contracts, including subscribe/resolve contracts for
//!   subscription root fields
//! - One namespace per object type plus an aggregate `Resolvers` interface
//! - A best-effort formatting pass

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod typescript;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use format::{CodeFormatter, FormatError, FormatOutcome, IndentFormatter};
pub use generator::Generator;

use resolvergen_schema::GenerateArgs;

/// Generates resolver typings from generation arguments.
///
/// # Errors
/// Returns `CodegenError` if generation fails. A formatting failure is not
/// an error; see [`FormatOutcome::is_degraded`].
pub fn generate(args: &GenerateArgs, config: &GeneratorConfig) -> Result<FormatOutcome, CodegenError> {
    Generator::new(args, config).run()
}

/// Generates resolver typings from a JSON schema description.
///
/// # Arguments
/// * `json` - Serialized generation arguments
/// * `config` - Generator configuration
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_json(json: &str, config: &GeneratorConfig) -> Result<FormatOutcome, CodegenError> {
    let args = resolvergen_schema::parse_args(json)?;
    generate(&args, config)
}

/// Generates resolver typings from a JSON schema description file.
///
/// # Arguments
/// * `path` - Path to the serialized generation arguments
/// * `config` - Generator configuration
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<FormatOutcome, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const USER_SCHEMA: &str = r#"{
        "types": [
            {
                "name": "User",
                "kind": "object",
                "fields": [
                    { "name": "id", "type": { "name": "ID", "kind": "scalar", "isRequired": true } },
                    {
                        "name": "posts",
                        "type": { "name": "Post", "kind": "object", "isList": true, "isRequired": true, "isItemRequired": true }
                    }
                ]
            }
        ],
        "modelMap": {
            "User": { "name": "UserModel", "path": "./models" }
        }
    }"#;

    #[test]
    fn test_generate_from_json() {
        let outcome =
            generate_from_json(USER_SCHEMA, &GeneratorConfig::default()).expect("Failed to generate");
        let code = outcome.code();

        assert!(!outcome.is_degraded());
        assert!(code.contains("export namespace UserResolvers {"));
        assert!(code.contains("export type PostsResolver = ("));
        assert!(code.contains(") => any[] | Promise<any[]>"));
        assert!(code.contains("parent: UserModel,"));
        assert!(code.contains("User: UserResolvers.Type"));
    }

    #[test]
    fn test_generate_from_invalid_json() {
        let result = generate_from_json("{", &GeneratorConfig::default());
        assert!(matches!(result, Err(CodegenError::Parse(_))));
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(USER_SCHEMA.as_bytes())
            .expect("Failed to write temp file");

        let outcome = generate_from_file(file.path(), &GeneratorConfig::default())
            .expect("Failed to generate");
        assert!(outcome.code().contains("UserResolvers"));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let result = generate_from_file(
            std::path::Path::new("/nonexistent/schema.json"),
            &GeneratorConfig::default(),
        );
        assert!(matches!(result, Err(CodegenError::Io(_))));
    }
}
