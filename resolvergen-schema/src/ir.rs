//! Intermediate representation for code generation.
//!
//! This module indexes the schema description once per run: which input
//! types exist, and which of them each object type reaches through its
//! field arguments.

use crate::error::SchemaError;
use crate::types::{GenerateArgs, TypeDescription};
use std::collections::{HashMap, HashSet};

/// Input type name to definition index.
pub type InputTypesMap = HashMap<String, TypeDescription>;

/// Object type name to the input type names its field arguments reference.
///
/// Lists keep field order, then argument order, and may repeat names.
pub type TypeToInputTypeAssociation = HashMap<String, Vec<String>>;

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone, Default)]
pub struct SchemaIr {
    /// Every input type keyed by name.
    pub input_types: InputTypesMap,
    /// Input types referenced by each object type.
    pub associations: TypeToInputTypeAssociation,
}

impl SchemaIr {
    /// Builds the input-type index and associations from generation arguments.
    #[must_use]
    pub fn from_args(args: &GenerateArgs) -> Self {
        Self::from_types(&args.types)
    }

    /// Builds the input-type index and associations from a type list.
    #[must_use]
    pub fn from_types(types: &[TypeDescription]) -> Self {
        let input_count = types.iter().filter(|t| t.is_input()).count();
        let input_types = types.iter().filter(|t| t.is_input()).fold(
            HashMap::with_capacity(input_count),
            |mut acc, t| {
                // Later definitions replace earlier ones on name collision.
                acc.insert(t.name.clone(), t.clone());
                acc
            },
        );

        let associations = types
            .iter()
            .filter(|t| t.is_object())
            .filter_map(|t| {
                let referenced: Vec<String> = t
                    .fields
                    .iter()
                    .flat_map(|f| f.input_arguments())
                    .map(|a| a.type_ref.name.clone())
                    .collect();
                (!referenced.is_empty()).then(|| (t.name.clone(), referenced))
            })
            .collect();

        Self {
            input_types,
            associations,
        }
    }

    /// Gets an input type by name.
    #[must_use]
    pub fn get_input_type(&self, name: &str) -> Option<&TypeDescription> {
        self.input_types.get(name)
    }

    /// Returns the input type names associated with an object type.
    #[must_use]
    pub fn associated_inputs(&self, object: &str) -> Option<&[String]> {
        self.associations.get(object).map(Vec::as_slice)
    }

    /// Returns the distinct input types an object type's declarations need.
    ///
    /// Names appear in first-seen order. An object type without associations
    /// yields an empty list.
    ///
    /// # Errors
    /// Returns `SchemaError::InputTypeNotFound` if an associated name is not
    /// in the input index.
    pub fn distinct_input_types(&self, object: &str) -> Result<Vec<&TypeDescription>, SchemaError> {
        let Some(names) = self.associations.get(object) else {
            return Ok(Vec::new());
        };

        let mut seen = HashSet::with_capacity(names.len());
        let mut distinct = Vec::new();
        for name in names {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let input = self
                .input_types
                .get(name)
                .ok_or_else(|| SchemaError::input_not_found(name, object))?;
            distinct.push(input);
        }

        Ok(distinct)
    }
}

/// Uppercases the first character of a string.
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
