//! File header generation: banner, imports and context type.

use resolvergen_schema::model::{ContextDefinition, ModelMap, group_models_by_path};

/// Banner marking the file as generated.
pub const GENERATED_BANNER: &str = "// Code generated by resolvergen, DO NOT EDIT.";

/// Name of the context type alias used when no context is configured.
pub const FALLBACK_CONTEXT_NAME: &str = "Context";

/// Returns the context type name printed in resolver signatures.
#[must_use]
pub fn context_name(context: Option<&ContextDefinition>) -> &str {
    context.map_or(FALLBACK_CONTEXT_NAME, |c| c.name.as_str())
}

/// Generator for the file header.
pub struct HeaderGenerator<'a> {
    model_map: &'a ModelMap,
    context: Option<&'a ContextDefinition>,
    request_info_module: &'a str,
}

impl<'a> HeaderGenerator<'a> {
    /// Creates a new header generator.
    #[must_use]
    pub fn new(
        model_map: &'a ModelMap,
        context: Option<&'a ContextDefinition>,
        request_info_module: &'a str,
    ) -> Self {
        Self {
            model_map,
            context,
            request_info_module,
        }
    }

    /// Generates the header.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(GENERATED_BANNER);
        output.push_str("\n\n");
        output.push_str(&format!(
            "import {{ GraphQLResolveInfo }} from '{}'\n",
            self.request_info_module
        ));

        for (path, names) in group_models_by_path(self.model_map) {
            output.push_str(&format!(
                "import {{ {} }} from '{}'\n",
                names.join(", "),
                path
            ));
        }

        output.push_str(&self.generate_context());
        output.push('\n');

        output
    }

    fn generate_context(&self) -> String {
        match self.context {
            Some(context) => format!(
                "import {{ {} }} from '{}'\n",
                context.name, context.path
            ),
            None => format!("type {} = any\n", FALLBACK_CONTEXT_NAME),
        }
    }
}
