//! # Resolvergen Schema
//!
//! Schema type descriptions and input-type analysis.
//!
//! This crate provides:
//! - Type descriptions for object, input and enum types
//! - Host model map and resolver context definitions
//! - JSON loading of generation arguments
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod model;
pub mod parser;
pub mod types;

pub use error::{ParseError, SchemaError};
pub use ir::{InputTypesMap, SchemaIr, TypeToInputTypeAssociation};
pub use model::{ContextDefinition, ModelField, ModelKind, ModelMap, ModelMapEntry};
pub use parser::{parse_args, parse_args_file};
pub use types::{
    ArgumentDescription, FieldDescription, GenerateArgs, TypeDescription, TypeKind, TypeReference,
};
