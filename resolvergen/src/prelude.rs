//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use resolvergen::prelude::*;
//! ```

// Schema types
pub use resolvergen_schema::{
    ArgumentDescription, ContextDefinition, FieldDescription, GenerateArgs, ModelField,
    ModelKind, ModelMap, ModelMapEntry, TypeDescription, TypeKind, TypeReference,
};
pub use resolvergen_schema::{ParseError, SchemaError, SchemaIr, parse_args, parse_args_file};

// Codegen types
pub use resolvergen_codegen::{
    CodeFormatter, CodegenError, FormatError, FormatOutcome, Generator, GeneratorConfig,
    IndentFormatter,
};
