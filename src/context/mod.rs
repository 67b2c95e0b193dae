//! @acp:module "VERSA Context"
//! @acp:summary "Canonical AI-assistant configuration document consumed by all adapters"
//! @acp:domain cli
//! @acp:layer model
//!
//! The context is normally produced and validated upstream (`.ai/context.json`).
//! Every field except `version` is optional, and a field whose value has the
//! wrong shape is treated as absent instead of failing the whole document.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{Result, VersaError};

/// Default location of the context document inside a project
pub const DEFAULT_CONTEXT_PATH: &str = ".ai/context.json";

fn default_version() -> String {
    "1.0".to_string()
}

/// @acp:summary "Canonical VERSA context document"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Context format version
    #[serde(default = "default_version", deserialize_with = "lenient_version")]
    pub version: String,

    /// Human-facing project identity
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Assistant behavior knobs
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,

    /// Full text of each rule document, in order
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,

    /// Glob patterns of files relevant to the assistant
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,

    /// File and command permissions
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            version: default_version(),
            metadata: None,
            settings: None,
            rules: None,
            context: None,
            permissions: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// @acp:summary "Model settings plus arbitrary tool-specific flags"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    /// Any JSON number; integers and floats are kept as given
    pub max_tokens: Option<Number>,

    /// Tool-specific keys (`streaming`, `autocomplete`, `inlineEdit`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    /// Look up a tool-specific setting by its exact key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Set a tool-specific setting
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub files: Option<FilePermissions>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub commands: Option<CommandPermissions>,
}

/// Patterns the assistant may (`write`) or must not (`deny`) modify
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilePermissions {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub write: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub deny: Option<Vec<String>>,
}

/// Shell commands the assistant may or must not run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandPermissions {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub deny: Option<Vec<String>>,
}

impl Context {
    /// @acp:summary "Load a context from a JSON or YAML file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loading context from {}", path.display());

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(content)?;
        Self::from_value(value)
    }

    /// Build a context from an already-parsed document.
    ///
    /// The document must be a mapping; anything inside it that has the wrong
    /// shape degrades to "absent".
    pub fn from_value(value: Value) -> Result<Self> {
        let kind = value_kind(&value);
        let Value::Object(map) = value else {
            return Err(VersaError::InvalidInput(format!(
                "context must be a mapping, found {}",
                kind
            )));
        };

        if !map.contains_key("version") {
            tracing::warn!("Context has no version marker, assuming {}", default_version());
        }

        Ok(serde_json::from_value(Value::Object(map))?)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Deserialize an optional field, treating null or a wrongly-shaped value as absent
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    let kind = value_kind(&value);
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::warn!("Ignoring malformed context field ({}): {}", kind, e);
            Ok(None)
        }
    }
}

fn lenient_version<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let version: Option<String> = lenient(deserializer)?;
    Ok(version.unwrap_or_else(default_version))
}
