//! Top-level code generator.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::format::{CodeFormatter, FormatOutcome, format_output};
use crate::typescript::{EnumGenerator, HeaderGenerator, NamespaceGenerator};
use resolvergen_schema::ir::SchemaIr;
use resolvergen_schema::types::GenerateArgs;

/// Generates resolver typings for a schema description.
pub struct Generator<'a> {
    args: &'a GenerateArgs,
    config: &'a GeneratorConfig,
    ir: SchemaIr,
}

impl<'a> Generator<'a> {
    /// Creates a new generator, indexing the schema's input types.
    #[must_use]
    pub fn new(args: &'a GenerateArgs, config: &'a GeneratorConfig) -> Self {
        Self {
            args,
            config,
            ir: SchemaIr::from_args(args),
        }
    }

    /// Returns the intermediate representation built for this run.
    #[must_use]
    pub fn ir(&self) -> &SchemaIr {
        &self.ir
    }

    /// Generates the unformatted output text.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if an object type references an input
    /// type missing from the schema description.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let namespaces = NamespaceGenerator::new(self.args, &self.ir, self.config);
        let mut output = String::new();

        output.push_str(
            &HeaderGenerator::new(
                &self.args.model_map,
                self.args.context.as_ref(),
                &self.config.request_info_module,
            )
            .generate(),
        );
        output.push('\n');
        output.push_str(&EnumGenerator::new(self.args).generate());
        output.push('\n');
        output.push_str(&namespaces.generate()?);
        output.push_str(&namespaces.generate_aggregate());

        tracing::debug!(
            objects = self.args.object_types().count(),
            inputs = self.ir.input_types.len(),
            bytes = output.len(),
            "generated resolver typings"
        );

        Ok(output)
    }

    /// Generates the output and runs it through a formatter.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation fails. Formatter failures are
    /// reported inside the returned outcome.
    pub fn generate_formatted(
        &self,
        formatter: &dyn CodeFormatter,
    ) -> Result<FormatOutcome, CodegenError> {
        Ok(format_output(self.generate()?, formatter))
    }

    /// Generates the output, formatting it if the configuration asks for it.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation fails.
    pub fn run(&self) -> Result<FormatOutcome, CodegenError> {
        if self.config.format {
            self.generate_formatted(&self.config.formatter())
        } else {
            Ok(FormatOutcome::Skipped(self.generate()?))
        }
    }
}
