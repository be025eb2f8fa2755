//! Field and argument type printing.

use resolvergen_schema::model::ModelMap;
use resolvergen_schema::types::{TypeKind, TypeReference};

/// TypeScript type accepting any value.
pub const ANY_TYPE: &str = "any";

/// Returns the TypeScript primitive for a built-in GraphQL scalar.
#[must_use]
pub fn builtin_scalar(name: &str) -> Option<&'static str> {
    match name {
        "Int" | "Float" => Some("number"),
        "String" | "ID" => Some("string"),
        "Boolean" => Some("boolean"),
        _ => None,
    }
}

/// Renders type references as TypeScript type expressions.
#[derive(Debug, Clone, Copy)]
pub struct TypePrinter<'a> {
    model_map: &'a ModelMap,
}

impl<'a> TypePrinter<'a> {
    /// Creates a new type printer.
    #[must_use]
    pub fn new(model_map: &'a ModelMap) -> Self {
        Self { model_map }
    }

    /// Returns the host model name for a schema type, or `any` if unmapped.
    #[must_use]
    pub fn model_name(&self, type_name: &str) -> &'a str {
        self.model_map
            .get(type_name)
            .map_or(ANY_TYPE, |entry| entry.name.as_str())
    }

    /// Prints a reference with list wrapping and nullability applied.
    #[must_use]
    pub fn print(&self, type_ref: &TypeReference) -> String {
        let base = self.print_named(type_ref);

        if !type_ref.is_list {
            return nullable(base, type_ref.is_required);
        }

        let item = if type_ref.is_item_required {
            base
        } else {
            format!("({} | null)", base)
        };
        nullable(format!("{}[]", item), type_ref.is_required)
    }

    /// Prints the referenced named type without wrapping.
    fn print_named(&self, type_ref: &TypeReference) -> String {
        match type_ref.kind {
            TypeKind::Scalar => match builtin_scalar(&type_ref.name) {
                Some(primitive) => primitive.to_string(),
                None => self.model_name(&type_ref.name).to_string(),
            },
            TypeKind::Enum | TypeKind::Input => type_ref.name.clone(),
            TypeKind::Object | TypeKind::Interface | TypeKind::Union => {
                self.model_name(&type_ref.name).to_string()
            }
        }
    }
}

fn nullable(ty: String, required: bool) -> String {
    if required {
        ty
    } else {
        format!("{} | null", ty)
    }
}
