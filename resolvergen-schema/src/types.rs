//! Schema type descriptions.
//!
//! This module contains the data structures handed over by the schema parser:
//! object, input and enum types together with their fields, arguments and
//! type references.

use crate::model::{ContextDefinition, ModelMap};
use serde::{Deserialize, Serialize};

/// Complete input of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArgs {
    /// Schema types in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDescription>,
    /// Schema type name to host model mapping.
    #[serde(default)]
    pub model_map: ModelMap,
    /// Optional resolver context type.
    #[serde(default)]
    pub context: Option<ContextDefinition>,
}

impl GenerateArgs {
    /// Creates generation arguments from a type list with an empty model map.
    #[must_use]
    pub fn new(types: Vec<TypeDescription>) -> Self {
        Self {
            types,
            model_map: ModelMap::new(),
            context: None,
        }
    }

    /// Sets the model map.
    #[must_use]
    pub fn with_model_map(mut self, model_map: ModelMap) -> Self {
        self.model_map = model_map;
        self
    }

    /// Sets the context definition.
    #[must_use]
    pub fn with_context(mut self, context: ContextDefinition) -> Self {
        self.context = Some(context);
        self
    }

    /// Iterates over object types in declaration order.
    pub fn object_types(&self) -> impl Iterator<Item = &TypeDescription> {
        self.types.iter().filter(|t| t.is_object())
    }

    /// Iterates over enum types in declaration order.
    pub fn enum_types(&self) -> impl Iterator<Item = &TypeDescription> {
        self.types.iter().filter(|t| t.is_enum())
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDescription> {
        self.types.iter().find(|t| t.name == name)
    }
}

/// Kind of a schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Scalar type (built-in or custom).
    Scalar,
    /// Enum type.
    Enum,
    /// Input object type.
    Input,
    /// Object type with resolvable fields.
    Object,
    /// Interface type.
    Interface,
    /// Union type.
    Union,
}

impl TypeKind {
    /// Returns true for object types.
    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(self, Self::Object)
    }

    /// Returns true for input types.
    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self, Self::Input)
    }

    /// Returns true for enum types.
    #[must_use]
    pub const fn is_enum(self) -> bool {
        matches!(self, Self::Enum)
    }

    /// Returns true for scalar types.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar)
    }

    /// Returns true for types backed by a host model (object, interface, union).
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::Interface | Self::Union)
    }
}

/// Reference to a type from a field or argument.
///
/// `is_required` describes the outer value. For lists, `is_item_required`
/// describes the items independently, so `[T]!` and `[T!]` differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReference {
    /// Referenced type name.
    pub name: String,
    /// Kind of the referenced type.
    pub kind: TypeKind,
    /// Whether the reference is wrapped in a list.
    #[serde(default)]
    pub is_list: bool,
    /// Whether the outer value is non-null.
    #[serde(default)]
    pub is_required: bool,
    /// Whether list items are non-null.
    #[serde(default)]
    pub is_item_required: bool,
}

impl TypeReference {
    /// Creates a nullable, non-list reference.
    #[must_use]
    pub fn named(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_list: false,
            is_required: false,
            is_item_required: false,
        }
    }

    /// Creates a nullable scalar reference.
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::named(name, TypeKind::Scalar)
    }

    /// Marks the outer value as non-null.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Wraps the reference in a list with the given item nullability.
    #[must_use]
    pub fn list(mut self, item_required: bool) -> Self {
        self.is_list = true;
        self.is_item_required = item_required;
        self
    }

    /// Returns true if the referenced type is an input type.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        self.kind.is_input()
    }
}

/// One argument of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentDescription {
    /// Argument name.
    pub name: String,
    /// Argument type.
    #[serde(rename = "type")]
    pub type_ref: TypeReference,
}

impl ArgumentDescription {
    /// Creates a new argument description.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: TypeReference) -> Self {
        Self {
            name: name.into(),
            type_ref,
        }
    }
}

/// Field of an object or input type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescription {
    /// Field name.
    pub name: String,
    /// Field type.
    #[serde(rename = "type")]
    pub type_ref: TypeReference,
    /// Arguments in declaration order.
    #[serde(default)]
    pub arguments: Vec<ArgumentDescription>,
}

impl FieldDescription {
    /// Creates a field without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: TypeReference) -> Self {
        Self {
            name: name.into(),
            type_ref,
            arguments: Vec::new(),
        }
    }

    /// Adds an argument.
    #[must_use]
    pub fn with_argument(mut self, argument: ArgumentDescription) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Returns true if the field declares at least one argument.
    #[must_use]
    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Iterates over arguments whose type is an input type.
    pub fn input_arguments(&self) -> impl Iterator<Item = &ArgumentDescription> {
        self.arguments.iter().filter(|a| a.type_ref.is_input())
    }
}

/// One schema type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescription {
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescription>,
    /// Enum values in declaration order.
    #[serde(default)]
    pub values: Vec<String>,
}

impl TypeDescription {
    /// Creates a type description without fields.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an object type.
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Object)
    }

    /// Creates an input type.
    #[must_use]
    pub fn input(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Input)
    }

    /// Creates an enum type with the given values.
    #[must_use]
    pub fn enumeration<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut desc = Self::new(name, TypeKind::Enum);
        desc.values = values.into_iter().map(Into::into).collect();
        desc
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescription) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a field in place.
    pub fn add_field(&mut self, field: FieldDescription) {
        self.fields.push(field);
    }

    /// Returns true if this is an object type.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        self.kind.is_object()
    }

    /// Returns true if this is an input type.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        self.kind.is_input()
    }

    /// Returns true if this is an enum type.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        self.kind.is_enum()
    }
}
