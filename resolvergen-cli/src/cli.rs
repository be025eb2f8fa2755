//! Command line: schema description JSON in, resolver typings out.

use anyhow::{Context, bail};
use clap::Parser;
use resolvergen::{FormatOutcome, GeneratorConfig};
use std::path::PathBuf;

/// generate TypeScript resolver typings from a GraphQL schema description
#[derive(Parser, Debug)]
#[command(name = "resolvergen", version)]
pub struct CommandLineInterface {
    /// schema description JSON produced by the schema parser
    #[arg(short, long)]
    schema: PathBuf,

    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// generator configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// name of the subscription root type
    #[arg(long)]
    subscription_root: Option<String>,

    /// skip the formatting pass
    #[arg(long, default_value_t = false)]
    no_format: bool,

    /// fail instead of writing unformatted output when formatting fails
    #[arg(long, default_value_t = false)]
    strict: bool,
}

impl CommandLineInterface {
    /// Parses the process arguments.
    pub fn load() -> Self {
        Self::parse()
    }

    /// Builds the generator configuration: file first, then flag overrides.
    fn resolve_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(root) = &self.subscription_root {
            config = config.with_subscription_root(root.clone());
        }
        if self.no_format {
            config = config.with_format(false);
        }

        Ok(config)
    }

    /// Runs generation and writes the result.
    pub fn execute(&self) -> anyhow::Result<()> {
        let config = self.resolve_config()?;
        let outcome = resolvergen::generate_from_file(&self.schema, &config)
            .with_context(|| format!("failed to generate from {}", self.schema.display()))?;

        if let FormatOutcome::Unformatted { error, .. } = &outcome {
            if self.strict {
                bail!("generated code could not be formatted: {error}");
            }
        }

        match &self.out {
            Some(path) => {
                std::fs::write(path, outcome.code())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(
                    path = %path.display(),
                    degraded = outcome.is_degraded(),
                    "wrote resolver typings"
                );
            }
            None => print!("{}", outcome.code()),
        }

        Ok(())
    }
}
