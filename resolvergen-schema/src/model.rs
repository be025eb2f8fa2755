//! Host model mapping.
//!
//! A model map associates schema type names with the host-language types
//! that back them, along with the module each host type is declared in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema type name to host model lookup table.
///
/// Ordered so that anything derived from iteration is deterministic.
pub type ModelMap = BTreeMap<String, ModelMapEntry>;

/// Kind of host declaration backing a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelKind {
    /// Interface declaration.
    #[default]
    Interface,
    /// Type alias declaration.
    TypeAlias,
    /// Type alias of a string-literal union. Never imported.
    Enum,
}

/// One field declared on a host model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelField {
    /// Field name.
    pub name: String,
    /// Whether the field is optional on the host type.
    #[serde(default)]
    pub optional: bool,
}

impl ModelField {
    /// Creates a required model field.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
        }
    }

    /// Creates an optional model field.
    #[must_use]
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: true,
        }
    }
}

/// Host model backing one schema type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMapEntry {
    /// Host type name.
    pub name: String,
    /// Declaring module path, as written in an import.
    pub path: String,
    /// Declaration kind.
    #[serde(default)]
    pub kind: ModelKind,
    /// Host fields in declaration order.
    #[serde(default)]
    pub fields: Vec<ModelField>,
}

impl ModelMapEntry {
    /// Creates an interface model entry without fields.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: ModelKind::Interface,
            fields: Vec::new(),
        }
    }

    /// Sets the declaration kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ModelKind) -> Self {
        self.kind = kind;
        self
    }

    /// Adds a host field.
    #[must_use]
    pub fn with_field(mut self, field: ModelField) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns true if the model is imported into generated code.
    #[must_use]
    pub fn is_importable(&self) -> bool {
        self.kind != ModelKind::Enum
    }
}

/// Resolver context type injected into every resolver contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDefinition {
    /// Context type name.
    pub name: String,
    /// Declaring module path.
    pub path: String,
}

impl ContextDefinition {
    /// Creates a new context definition.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Groups importable model names by declaring module path.
///
/// Paths come out sorted; names keep model map order within a path.
#[must_use]
pub fn group_models_by_path(model_map: &ModelMap) -> BTreeMap<&str, Vec<&str>> {
    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for entry in model_map.values().filter(|e| e.is_importable()) {
        let names = groups.entry(entry.path.as_str()).or_default();
        if !names.contains(&entry.name.as_str()) {
            names.push(entry.name.as_str());
        }
    }
    groups
}
