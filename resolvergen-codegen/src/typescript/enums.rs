//! Enum type generation.

use resolvergen_schema::types::GenerateArgs;

/// Generator for enum declarations.
pub struct EnumGenerator<'a> {
    args: &'a GenerateArgs,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(args: &'a GenerateArgs) -> Self {
        Self { args }
    }

    /// Generates all enum declarations in schema order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for enum_type in self.args.enum_types() {
            output.push_str(&generate_enum(&enum_type.name, &enum_type.values));
        }

        output
    }
}

/// Generates a string-literal union for one enum.
fn generate_enum(name: &str, values: &[String]) -> String {
    let variants = if values.is_empty() {
        "never".to_string()
    } else {
        values
            .iter()
            .map(|v| format!("'{}'", v))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    format!("type {} = {}\n", name, variants)
}
