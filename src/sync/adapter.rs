//! @acp:module "Tool Adapter Trait"
//! @acp:summary "Transform/validate contract shared by all tool adapters"
//! @acp:domain cli
//! @acp:layer service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::helpers;
use super::tool::{OutputFormat, Tool};
use crate::context::Context;

/// Options that can be passed to adapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdapterOptions {
    /// Whether to include explanatory comments in output
    pub comments: bool,

    /// Whether to pretty print structured output
    pub format: bool,

    /// Custom formatting options
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub format_options: Map<String, Value>,

    /// Additional tool-specific options, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            comments: true,
            format: true,
            format_options: Map::new(),
            extra: Map::new(),
        }
    }
}

impl AdapterOptions {
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }
}

/// Result of adapter validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no diagnostics
    pub fn ok() -> Self {
        Self {
            valid: true,
            ..Default::default()
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
            warnings: Vec::new(),
        }
    }
}

/// Metadata about an adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterMetadata {
    pub name: &'static str,
    pub tool: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub output_format: OutputFormat,
    pub supports: Vec<&'static str>,
}

/// Tool adapter trait - implement for each supported tool
///
/// Adapters hold no state: `transform` is a pure function of its arguments,
/// so a single instance can be shared across threads.
pub trait ToolAdapter: Send + Sync {
    /// Adapter identifier (e.g. `cursor-adapter`)
    fn name(&self) -> &'static str;

    /// Target tool
    fn tool(&self) -> Tool;

    /// Adapter version
    fn version(&self) -> &'static str;

    /// One-line description of the produced file
    fn description(&self) -> &'static str;

    /// Context sections this adapter renders
    fn supports(&self) -> &'static [&'static str];

    /// Transform a context into the tool's native format
    fn transform(&self, context: &Context, options: &AdapterOptions) -> String;

    /// Transform with default options
    fn generate(&self, context: &Context) -> String {
        self.transform(context, &AdapterOptions::default())
    }

    /// Validate that output is usable by the target tool
    fn validate(&self, output: &str) -> ValidationResult {
        helpers::validate_output(output)
    }

    fn metadata(&self) -> AdapterMetadata {
        AdapterMetadata {
            name: self.name(),
            tool: self.tool().id(),
            version: self.version(),
            description: self.description(),
            output_format: self.tool().format(),
            supports: self.supports().to_vec(),
        }
    }
}
