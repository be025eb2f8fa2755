//! Generator configuration.

use crate::error::CodegenError;
use crate::format::IndentFormatter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default name of the subscription root object type.
pub const DEFAULT_SUBSCRIPTION_ROOT: &str = "Subscription";

/// Options controlling generated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Object type whose fields get subscribe/resolve contracts.
    pub subscription_root: String,
    /// Identifier of the default resolver object in each namespace.
    pub default_resolvers_ident: String,
    /// Module the request info type is imported from.
    pub request_info_module: String,
    /// Whether to run the formatting pass.
    pub format: bool,
    /// Indentation width used by the formatter.
    pub indent_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            subscription_root: DEFAULT_SUBSCRIPTION_ROOT.to_string(),
            default_resolvers_ident: "defaultResolvers".to_string(),
            request_info_module: "graphql".to_string(),
            format: true,
            indent_width: 2,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file. Missing keys keep defaults.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be read or decoded.
    pub fn from_file(path: &Path) -> Result<Self, CodegenError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Sets the subscription root type name.
    #[must_use]
    pub fn with_subscription_root(mut self, name: impl Into<String>) -> Self {
        self.subscription_root = name.into();
        self
    }

    /// Sets the default resolver object identifier.
    #[must_use]
    pub fn with_default_resolvers_ident(mut self, ident: impl Into<String>) -> Self {
        self.default_resolvers_ident = ident.into();
        self
    }

    /// Sets the request info import module.
    #[must_use]
    pub fn with_request_info_module(mut self, module: impl Into<String>) -> Self {
        self.request_info_module = module.into();
        self
    }

    /// Enables or disables the formatting pass.
    #[must_use]
    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    /// Sets the formatter indentation width.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Returns true if the named object type is the subscription root.
    #[must_use]
    pub fn is_subscription_root(&self, type_name: &str) -> bool {
        self.subscription_root == type_name
    }

    /// Returns the formatter matching this configuration.
    #[must_use]
    pub fn formatter(&self) -> IndentFormatter {
        IndentFormatter::new(self.indent_width)
    }
}
