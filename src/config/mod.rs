//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::context::DEFAULT_CONTEXT_PATH;
use crate::error::VersaError;
use crate::sync::{AdapterOptions, Tool};

/// Default config file name, relative to the project root
pub const DEFAULT_CONFIG_PATH: &str = ".versa.config.json";

fn default_config_schema() -> String {
    "https://dotaislash.dev/schemas/v1/versa.config.schema.json".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_context() -> PathBuf {
    PathBuf::from(DEFAULT_CONTEXT_PATH)
}

fn default_tools() -> Vec<String> {
    Tool::all().iter().map(|t| t.id().to_string()).collect()
}

fn default_true() -> bool {
    true
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn is_default_root(p: &Path) -> bool {
    p == Path::new(".")
}

/// @acp:summary "VERSA adapter configuration"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// JSON Schema URL for validation
    #[serde(rename = "$schema", default = "default_config_schema")]
    pub schema: String,

    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Context document to transform
    #[serde(default = "default_context")]
    pub context: PathBuf,

    /// Tools to sync (identifiers, case-insensitive)
    #[serde(default = "default_tools")]
    pub tools: Vec<String>,

    /// Include generator comments in output
    #[serde(default = "default_true")]
    pub comments: bool,

    /// Pretty print structured output
    #[serde(default = "default_true")]
    pub format: bool,

    /// Project root that output paths are resolved against
    #[serde(default = "default_root", skip_serializing_if = "is_default_root")]
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: default_config_schema(),
            version: default_version(),
            context: default_context(),
            tools: default_tools(),
            comments: true,
            format: true,
            root: default_root(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from .versa.config.json file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config, falling back to defaults when the file is missing"
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Adapter options derived from the output settings
    pub fn adapter_options(&self) -> AdapterOptions {
        AdapterOptions::default()
            .with_comments(self.comments)
            .with_format(self.format)
    }

    /// Parse the configured tool identifiers
    pub fn resolve_tools(&self) -> crate::Result<Vec<Tool>> {
        self.tools.iter().map(|name| name.parse::<Tool>()).collect()
    }

    /// Context path resolved against the project root
    pub fn context_path(&self) -> PathBuf {
        self.root.join(&self.context)
    }
}
