//! Resolver contract generation.
//!
//! Every field gets a resolver contract type alias. Fields of ordinary
//! object types resolve through a single callable; fields of the
//! subscription root are split into `subscribe` (produces the event stream)
//! and an optional `resolve` (shapes each emitted value).

use crate::typescript::inputs::args_param_type;
use crate::typescript::printer::TypePrinter;
use resolvergen_schema::ir::upper_first;
use resolvergen_schema::types::{FieldDescription, TypeDescription};

/// Type of the request info parameter.
pub const REQUEST_INFO_TYPE: &str = "GraphQLResolveInfo";

/// Returns the resolver contract alias name for a field.
#[must_use]
pub fn resolver_type_name(field: &FieldDescription) -> String {
    format!("{}Resolver", upper_first(&field.name))
}

/// Parameter types of a resolver signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverParams {
    /// Parent host model type.
    pub parent: String,
    /// Argument bundle type, or `{}`.
    pub args: String,
    /// Context type.
    pub context: String,
}

/// One callable signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Parameter types.
    pub params: ResolverParams,
    /// Return type, including the awaitable alternative.
    pub returns: String,
}

impl Signature {
    /// Renders the signature as a function type.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "(\nparent: {},\nargs: {},\nctx: {},\ninfo: {},\n) => {}",
            self.params.parent, self.params.args, self.params.context, REQUEST_INFO_TYPE, self.returns
        )
    }
}

/// Contract a resolver implementation must satisfy for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverContract {
    /// Single callable returning the field value.
    Callable(Signature),
    /// Subscription root field.
    Subscription {
        /// Required, returns a stream of field values.
        subscribe: Signature,
        /// Optional, maps each emitted value.
        resolve: Signature,
    },
}

impl ResolverContract {
    /// Builds the contract for a field value type.
    #[must_use]
    pub fn new(params: ResolverParams, value_type: &str, subscription: bool) -> Self {
        let resolve = Signature {
            params: params.clone(),
            returns: awaitable(value_type),
        };

        if subscription {
            Self::Subscription {
                subscribe: Signature {
                    params,
                    returns: awaitable(&format!("AsyncIterator<{}>", value_type)),
                },
                resolve,
            }
        } else {
            Self::Callable(resolve)
        }
    }

    /// Returns true for the subscribe/resolve shape.
    #[must_use]
    pub const fn is_subscription(&self) -> bool {
        matches!(self, Self::Subscription { .. })
    }

    /// Renders the contract as a type expression.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Callable(signature) => signature.render(),
            Self::Subscription { subscribe, resolve } => format!(
                "{{\nsubscribe: {}\nresolve?: {}\n}}",
                subscribe.render(),
                resolve.render()
            ),
        }
    }
}

fn awaitable(ty: &str) -> String {
    format!("{0} | Promise<{0}>", ty)
}

/// Generator for resolver contracts of one object type.
pub struct ResolverGenerator<'a> {
    printer: TypePrinter<'a>,
    context_name: &'a str,
    subscription_root: &'a str,
}

impl<'a> ResolverGenerator<'a> {
    /// Creates a new resolver generator.
    #[must_use]
    pub fn new(printer: TypePrinter<'a>, context_name: &'a str, subscription_root: &'a str) -> Self {
        Self {
            printer,
            context_name,
            subscription_root,
        }
    }

    /// Synthesizes the contract for one field of an object type.
    #[must_use]
    pub fn contract(&self, object: &TypeDescription, field: &FieldDescription) -> ResolverContract {
        let params = ResolverParams {
            parent: self.printer.model_name(&object.name).to_string(),
            args: args_param_type(field),
            context: self.context_name.to_string(),
        };
        let value_type = self.printer.print(&field.type_ref);

        ResolverContract::new(params, &value_type, object.name == self.subscription_root)
    }

    /// Generates one contract type alias per field.
    #[must_use]
    pub fn generate_aliases(&self, object: &TypeDescription) -> String {
        let mut output = String::new();

        for field in &object.fields {
            output.push_str(&format!(
                "export type {} = {}\n",
                resolver_type_name(field),
                self.contract(object, field).render()
            ));
        }

        output
    }

    /// Generates the aggregate `Type` interface of the namespace.
    #[must_use]
    pub fn generate_type_interface(&self, object: &TypeDescription) -> String {
        let mut output = String::from("export interface Type {\n");

        for field in &object.fields {
            output.push_str(&format!("{}: {}\n", field.name, resolver_type_name(field)));
        }

        output.push_str("}\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolvergen_schema::model::{ModelMap, ModelMapEntry};
    use resolvergen_schema::types::{ArgumentDescription, TypeKind, TypeReference};

    fn create_test_model_map() -> ModelMap {
        let mut map = ModelMap::new();
        map.insert("User".into(), ModelMapEntry::new("UserModel", "./models"));
        map.insert("Post".into(), ModelMapEntry::new("PostModel", "./models"));
        map
    }

    fn create_user() -> TypeDescription {
        TypeDescription::object("User")
            .with_field(FieldDescription::new("id", TypeReference::scalar("ID").required()))
            .with_field(
                FieldDescription::new(
                    "posts",
                    TypeReference::named("Post", TypeKind::Object).list(true).required(),
                )
                .with_argument(ArgumentDescription::new("first", TypeReference::scalar("Int"))),
            )
    }

    fn create_subscription() -> TypeDescription {
        TypeDescription::object("Subscription").with_field(FieldDescription::new(
            "postAdded",
            TypeReference::named("Post", TypeKind::Object).required(),
        ))
    }

    #[test]
    fn test_resolver_type_name() {
        let field = FieldDescription::new("postAdded", TypeReference::scalar("String"));
        assert_eq!(resolver_type_name(&field), "PostAddedResolver");
    }

    #[test]
    fn test_standard_contract() {
        let map = create_test_model_map();
        let generator = ResolverGenerator::new(TypePrinter::new(&map), "Context", "Subscription");
        let user = create_user();

        let contract = generator.contract(&user, &user.fields[1]);
        assert!(!contract.is_subscription());
        let ResolverContract::Callable(signature) = &contract else {
            panic!("expected callable contract");
        };
        assert_eq!(signature.params.parent, "UserModel");
        assert_eq!(signature.params.args, "ArgsPosts");
        assert_eq!(signature.params.context, "Context");
        assert_eq!(signature.returns, "PostModel[] | Promise<PostModel[]>");
    }

    #[test]
    fn test_contract_without_arguments_takes_empty_object() {
        let map = create_test_model_map();
        let generator = ResolverGenerator::new(TypePrinter::new(&map), "Context", "Subscription");
        let user = create_user();

        let rendered = generator.contract(&user, &user.fields[0]).render();
        assert!(rendered.contains("args: {},"));
        assert!(rendered.contains("info: GraphQLResolveInfo,"));
        assert!(rendered.ends_with(") => string | Promise<string>"));
    }

    #[test]
    fn test_unmapped_parent_is_any() {
        let map = create_test_model_map();
        let generator = ResolverGenerator::new(TypePrinter::new(&map), "Ctx", "Subscription");
        let query = TypeDescription::object("Query").with_field(FieldDescription::new(
            "me",
            TypeReference::named("User", TypeKind::Object),
        ));

        let rendered = generator.contract(&query, &query.fields[0]).render();
        assert!(rendered.contains("parent: any,"));
        assert!(rendered.contains("ctx: Ctx,"));
        assert!(rendered.contains("=> UserModel | null | Promise<UserModel | null>"));
    }

    #[test]
    fn test_subscription_contract() {
        let map = create_test_model_map();
        let generator = ResolverGenerator::new(TypePrinter::new(&map), "Context", "Subscription");
        let subscription = create_subscription();

        let contract = generator.contract(&subscription, &subscription.fields[0]);
        let ResolverContract::Subscription { subscribe, resolve } = &contract else {
            panic!("expected subscription contract");
        };
        assert_eq!(
            subscribe.returns,
            "AsyncIterator<PostModel> | Promise<AsyncIterator<PostModel>>"
        );
        assert_eq!(resolve.returns, "PostModel | Promise<PostModel>");

        let rendered = contract.render();
        assert!(rendered.starts_with("{\nsubscribe: (\n"));
        assert!(rendered.contains("\nresolve?: (\n"));
        assert!(rendered.ends_with("}"));
    }

    #[test]
    fn test_configured_subscription_root() {
        let map = create_test_model_map();
        let generator = ResolverGenerator::new(TypePrinter::new(&map), "Context", "Events");

        let subscription = create_subscription();
        assert!(!generator.contract(&subscription, &subscription.fields[0]).is_subscription());

        let events = TypeDescription::object("Events").with_field(FieldDescription::new(
            "tick",
            TypeReference::scalar("Int").required(),
        ));
        assert!(generator.contract(&events, &events.fields[0]).is_subscription());
    }

    #[test]
    fn test_generate_aliases_and_type_interface() {
        let map = create_test_model_map();
        let generator = ResolverGenerator::new(TypePrinter::new(&map), "Context", "Subscription");
        let user = create_user();

        let aliases = generator.generate_aliases(&user);
        assert!(aliases.contains("export type IdResolver = (\n"));
        assert!(aliases.contains("export type PostsResolver = (\n"));
        assert!(aliases.find("IdResolver").unwrap() < aliases.find("PostsResolver").unwrap());

        let interface = generator.generate_type_interface(&user);
        assert_eq!(
            interface,
            "export interface Type {\nid: IdResolver\nposts: PostsResolver\n}\n"
        );
    }
}
