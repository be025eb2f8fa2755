//! # Resolvergen
//!
//! Type-safe resolver typings for GraphQL servers written in TypeScript.
//!
//! Given a resolved schema description and a mapping from schema types to
//! host model types, resolvergen emits one namespace per object type with
//! input type declarations, argument bundles and resolver contracts, plus a
//! top-level `Resolvers` interface.
//!
//! ## Quick Start
//!
//! ```ignore
//! use resolvergen::prelude::*;
//!
//! let args = parse_args(&std::fs::read_to_string("schema.json")?)?;
//! let outcome = resolvergen::generate(&args, &GeneratorConfig::default())?;
//! if outcome.is_degraded() {
//!     eprintln!("formatting failed: {:?}", outcome.error());
//! }
//! std::fs::write("resolvers.ts", outcome.code())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Type descriptions, model maps and input-type analysis
//! - [`codegen`] - TypeScript generation and formatting

pub mod prelude;

/// Schema descriptions and input-type analysis.
pub mod schema {
    pub use resolvergen_schema::*;
}

/// TypeScript resolver typings generation.
pub mod codegen {
    pub use resolvergen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use resolvergen_codegen::{
    CodegenError, FormatOutcome, Generator, GeneratorConfig, generate, generate_from_file,
    generate_from_json,
};
pub use resolvergen_schema::{GenerateArgs, ModelMap, SchemaIr, parse_args, parse_args_file};
