//! Per-object-type namespace assembly.

use crate::config::GeneratorConfig;
use crate::typescript::defaults::DefaultResolverGenerator;
use crate::typescript::header::context_name;
use crate::typescript::inputs::InputGenerator;
use crate::typescript::printer::TypePrinter;
use crate::typescript::resolvers::ResolverGenerator;
use resolvergen_schema::error::SchemaError;
use resolvergen_schema::ir::SchemaIr;
use resolvergen_schema::types::{GenerateArgs, TypeDescription};

/// Returns the namespace name of an object type.
#[must_use]
pub fn namespace_name(object: &TypeDescription) -> String {
    format!("{}Resolvers", object.name)
}

/// Generator for object type namespaces and the aggregate interface.
pub struct NamespaceGenerator<'a> {
    args: &'a GenerateArgs,
    defaults: DefaultResolverGenerator<'a>,
    inputs: InputGenerator<'a>,
    resolvers: ResolverGenerator<'a>,
}

impl<'a> NamespaceGenerator<'a> {
    /// Creates a new namespace generator.
    #[must_use]
    pub fn new(args: &'a GenerateArgs, ir: &'a SchemaIr, config: &'a GeneratorConfig) -> Self {
        let printer = TypePrinter::new(&args.model_map);
        Self {
            args,
            defaults: DefaultResolverGenerator::new(
                &args.model_map,
                &config.default_resolvers_ident,
            ),
            inputs: InputGenerator::new(ir, printer),
            resolvers: ResolverGenerator::new(
                printer,
                context_name(args.context.as_ref()),
                &config.subscription_root,
            ),
        }
    }

    /// Generates one namespace per object type, in schema order.
    ///
    /// # Errors
    /// Returns `SchemaError` if an object type references an unindexed
    /// input type.
    pub fn generate(&self) -> Result<String, SchemaError> {
        let mut output = String::new();

        for object in self.args.object_types() {
            output.push_str(&self.generate_namespace(object)?);
            output.push('\n');
        }

        Ok(output)
    }

    /// Generates the namespace of one object type.
    ///
    /// # Errors
    /// Returns `SchemaError` if an associated input type is not indexed.
    pub fn generate_namespace(&self, object: &TypeDescription) -> Result<String, SchemaError> {
        let mut output = String::new();

        output.push_str(&format!("export namespace {} {{\n", namespace_name(object)));
        output.push_str(&self.defaults.generate(object));
        output.push('\n');
        output.push_str(&self.inputs.generate_input_types(object)?);
        output.push('\n');
        output.push_str(&self.inputs.generate_arg_bundles(object));
        output.push('\n');
        output.push_str(&self.resolvers.generate_aliases(object));
        output.push('\n');
        output.push_str(&self.resolvers.generate_type_interface(object));
        output.push_str("}\n");

        Ok(output)
    }

    /// Generates the top-level interface mapping each object type to its
    /// namespace's `Type`.
    #[must_use]
    pub fn generate_aggregate(&self) -> String {
        let mut output = String::from("export interface Resolvers {\n");

        for object in self.args.object_types() {
            output.push_str(&format!(
                "{}: {}.Type\n",
                object.name,
                namespace_name(object)
            ));
        }

        output.push_str("}\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolvergen_schema::model::{ModelField, ModelMap, ModelMapEntry};
    use resolvergen_schema::types::{ArgumentDescription, FieldDescription, TypeKind, TypeReference};

    fn create_test_args() -> GenerateArgs {
        let filter_arg = |name: &str| {
            ArgumentDescription::new(name, TypeReference::named("PostFilter", TypeKind::Input))
        };
        let mut map = ModelMap::new();
        map.insert(
            "User".into(),
            ModelMapEntry::new("UserModel", "./models").with_field(ModelField::new("id")),
        );

        GenerateArgs::new(vec![
            TypeDescription::object("User")
                .with_field(FieldDescription::new("id", TypeReference::scalar("ID").required()))
                .with_field(
                    FieldDescription::new(
                        "posts",
                        TypeReference::named("Post", TypeKind::Object).list(true).required(),
                    )
                    .with_argument(filter_arg("filter")),
                )
                .with_field(
                    FieldDescription::new("drafts", TypeReference::named("Post", TypeKind::Object))
                        .with_argument(filter_arg("filter")),
                ),
            TypeDescription::input("PostFilter").with_field(FieldDescription::new(
                "published",
                TypeReference::scalar("Boolean"),
            )),
            TypeDescription::object("Post")
                .with_field(FieldDescription::new("title", TypeReference::scalar("String").required())),
        ])
        .with_model_map(map)
    }

    #[test]
    fn test_namespace_section_order() {
        let args = create_test_args();
        let ir = SchemaIr::from_args(&args);
        let config = GeneratorConfig::default();
        let generator = NamespaceGenerator::new(&args, &ir, &config);

        let output = generator.generate_namespace(&args.types[0]).expect("Failed to generate");

        let positions: Vec<usize> = [
            "export namespace UserResolvers {",
            "export const defaultResolvers",
            "export interface PostFilter {",
            "export interface ArgsPosts {",
            "export type IdResolver",
            "export interface Type {",
        ]
        .iter()
        .map(|needle| output.find(needle).expect(needle))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(output.matches("export interface PostFilter {").count(), 1);
        assert!(output.ends_with("}\n}\n"));
    }

    #[test]
    fn test_namespaces_follow_schema_order() {
        let args = create_test_args();
        let ir = SchemaIr::from_args(&args);
        let config = GeneratorConfig::default();
        let generator = NamespaceGenerator::new(&args, &ir, &config);

        let output = generator.generate().expect("Failed to generate");

        let user = output.find("export namespace UserResolvers").unwrap();
        let post = output.find("export namespace PostResolvers").unwrap();
        assert!(user < post);
        assert!(!output.contains("PostFilterResolvers"));
        // Post has no model: empty defaults and `any` parent.
        assert!(output.contains("export const defaultResolvers = {}"));
        assert!(output.contains("parent: any,"));
    }

    #[test]
    fn test_generate_aggregate() {
        let args = create_test_args();
        let ir = SchemaIr::from_args(&args);
        let config = GeneratorConfig::default();
        let generator = NamespaceGenerator::new(&args, &ir, &config);

        assert_eq!(
            generator.generate_aggregate(),
            "export interface Resolvers {\nUser: UserResolvers.Type\nPost: PostResolvers.Type\n}\n"
        );
    }

    #[test]
    fn test_missing_input_type_surfaces() {
        let args = GenerateArgs::new(vec![TypeDescription::object("Query").with_field(
            FieldDescription::new("search", TypeReference::scalar("String")).with_argument(
                ArgumentDescription::new("filter", TypeReference::named("Gone", TypeKind::Input)),
            ),
        )]);
        let ir = SchemaIr::from_args(&args);
        let config = GeneratorConfig::default();
        let generator = NamespaceGenerator::new(&args, &ir, &config);

        assert!(matches!(
            generator.generate(),
            Err(SchemaError::InputTypeNotFound { .. })
        ));
    }
}
