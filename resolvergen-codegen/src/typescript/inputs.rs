//! Input type and argument bundle generation.

use crate::typescript::printer::TypePrinter;
use resolvergen_schema::error::SchemaError;
use resolvergen_schema::ir::{SchemaIr, upper_first};
use resolvergen_schema::types::{FieldDescription, TypeDescription};

/// Returns the argument bundle type name for a field.
#[must_use]
pub fn args_type_name(field: &FieldDescription) -> String {
    format!("Args{}", upper_first(&field.name))
}

/// Returns the type of a field's `args` parameter.
///
/// Fields without arguments take an empty object.
#[must_use]
pub fn args_param_type(field: &FieldDescription) -> String {
    if field.has_arguments() {
        args_type_name(field)
    } else {
        "{}".to_string()
    }
}

/// Generator for input interfaces and argument bundles of one object type.
pub struct InputGenerator<'a> {
    ir: &'a SchemaIr,
    printer: TypePrinter<'a>,
}

impl<'a> InputGenerator<'a> {
    /// Creates a new input generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, printer: TypePrinter<'a>) -> Self {
        Self { ir, printer }
    }

    /// Generates an interface for each distinct input type the object reaches.
    ///
    /// # Errors
    /// Returns `SchemaError` if an associated input type is not indexed.
    pub fn generate_input_types(&self, object: &TypeDescription) -> Result<String, SchemaError> {
        let mut output = String::new();

        for input in self.ir.distinct_input_types(&object.name)? {
            output.push_str(&format!("export interface {} {{\n", input.name));
            for field in &input.fields {
                output.push_str(&format!(
                    "{}: {}\n",
                    field.name,
                    self.printer.print(&field.type_ref)
                ));
            }
            output.push_str("}\n");
        }

        Ok(output)
    }

    /// Generates an argument bundle interface for each field with arguments.
    #[must_use]
    pub fn generate_arg_bundles(&self, object: &TypeDescription) -> String {
        let mut output = String::new();

        for field in object.fields.iter().filter(|f| f.has_arguments()) {
            output.push_str(&format!("export interface {} {{\n", args_type_name(field)));
            for arg in &field.arguments {
                output.push_str(&format!(
                    "{}: {}\n",
                    arg.name,
                    self.printer.print(&arg.type_ref)
                ));
            }
            output.push_str("}\n");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolvergen_schema::model::ModelMap;
    use resolvergen_schema::types::{ArgumentDescription, TypeKind, TypeReference};

    fn create_test_types() -> Vec<TypeDescription> {
        let where_arg = || {
            ArgumentDescription::new("where", TypeReference::named("PostWhere", TypeKind::Input))
        };
        vec![
            TypeDescription::object("User")
                .with_field(FieldDescription::new("id", TypeReference::scalar("ID").required()))
                .with_field(
                    FieldDescription::new(
                        "posts",
                        TypeReference::named("Post", TypeKind::Object).list(true).required(),
                    )
                    .with_argument(where_arg())
                    .with_argument(ArgumentDescription::new(
                        "first",
                        TypeReference::scalar("Int"),
                    )),
                )
                .with_field(
                    FieldDescription::new("postCount", TypeReference::scalar("Int").required())
                        .with_argument(where_arg()),
                ),
            TypeDescription::input("PostWhere")
                .with_field(FieldDescription::new("title", TypeReference::scalar("String")))
                .with_field(FieldDescription::new(
                    "tags",
                    TypeReference::scalar("String").list(true).required(),
                )),
        ]
    }

    #[test]
    fn test_args_names() {
        let with_args = FieldDescription::new("posts", TypeReference::scalar("String"))
            .with_argument(ArgumentDescription::new("first", TypeReference::scalar("Int")));
        let without_args = FieldDescription::new("id", TypeReference::scalar("ID"));

        assert_eq!(args_type_name(&with_args), "ArgsPosts");
        assert_eq!(args_param_type(&with_args), "ArgsPosts");
        assert_eq!(args_param_type(&without_args), "{}");
    }

    #[test]
    fn test_input_types_declared_once() {
        let types = create_test_types();
        let ir = SchemaIr::from_types(&types);
        let map = ModelMap::new();
        let generator = InputGenerator::new(&ir, TypePrinter::new(&map));

        let output = generator.generate_input_types(&types[0]).expect("Failed to generate");

        assert_eq!(output.matches("export interface PostWhere {").count(), 1);
        assert!(output.contains("title: string | null\n"));
        assert!(output.contains("tags: string[]\n"));
    }

    #[test]
    fn test_no_input_types_without_association() {
        let types = vec![TypeDescription::object("Query")];
        let ir = SchemaIr::from_types(&types);
        let map = ModelMap::new();
        let generator = InputGenerator::new(&ir, TypePrinter::new(&map));

        assert!(generator.generate_input_types(&types[0]).expect("Failed to generate").is_empty());
    }

    #[test]
    fn test_arg_bundles() {
        let types = create_test_types();
        let ir = SchemaIr::from_types(&types);
        let map = ModelMap::new();
        let generator = InputGenerator::new(&ir, TypePrinter::new(&map));

        let output = generator.generate_arg_bundles(&types[0]);

        assert!(output.contains("export interface ArgsPosts {\nwhere: PostWhere | null\nfirst: number | null\n}"));
        assert!(output.contains("export interface ArgsPostCount {\nwhere: PostWhere | null\n}"));
        assert!(!output.contains("ArgsId"));
    }
}
