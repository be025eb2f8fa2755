//! Default resolver generation.
//!
//! Default resolvers read the schema field straight off the parent host
//! model. One is emitted per host field that a schema field of the same
//! name exists for.

use resolvergen_schema::model::{ModelField, ModelMap};
use resolvergen_schema::types::TypeDescription;

/// Generator for the default resolver object of one namespace.
pub struct DefaultResolverGenerator<'a> {
    model_map: &'a ModelMap,
    ident: &'a str,
}

impl<'a> DefaultResolverGenerator<'a> {
    /// Creates a new default resolver generator.
    #[must_use]
    pub fn new(model_map: &'a ModelMap, ident: &'a str) -> Self {
        Self { model_map, ident }
    }

    /// Generates the default resolver object for an object type.
    #[must_use]
    pub fn generate(&self, object: &TypeDescription) -> String {
        let Some(model) = self.model_map.get(&object.name) else {
            return format!("export const {} = {{}}\n", self.ident);
        };

        let mut output = String::new();
        output.push_str(&format!("export const {} = {{\n", self.ident));

        for field in model
            .fields
            .iter()
            .filter(|mf| object.fields.iter().any(|f| f.name == mf.name))
        {
            output.push_str(&generate_default_resolver(field, &model.name));
        }

        output.push_str("}\n");
        output
    }
}

fn generate_default_resolver(field: &ModelField, parent: &str) -> String {
    let body = if field.optional {
        format!(
            "(parent.{0} === undefined ? null : parent.{0})",
            field.name
        )
    } else {
        format!("parent.{}", field.name)
    };

    format!("{}: (parent: {}) => {},\n", field.name, parent, body)
}
