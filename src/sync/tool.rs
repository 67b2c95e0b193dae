//! @acp:module "Sync Tool Types"
//! @acp:summary "Supported AI tool definitions and metadata"
//! @acp:domain cli
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::VersaError;

/// Supported AI development tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    Cursor,
    Windsurf,
}

impl Tool {
    /// Get all built-in tools, in registry order
    pub fn all() -> &'static [Tool] {
        &[Tool::Cursor, Tool::Windsurf]
    }

    /// Registry key for this tool
    pub fn id(&self) -> &'static str {
        match self {
            Tool::Cursor => "cursor",
            Tool::Windsurf => "windsurf",
        }
    }

    /// Get the default output path for this tool
    pub fn output_path(&self) -> &'static str {
        match self {
            Tool::Cursor => ".cursorrules",
            Tool::Windsurf => ".windsurf/config.json",
        }
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Cursor => "Cursor",
            Tool::Windsurf => "Windsurf",
        }
    }

    /// Get the output format for this tool
    pub fn format(&self) -> OutputFormat {
        match self {
            Tool::Cursor => OutputFormat::Markdown,
            Tool::Windsurf => OutputFormat::Json,
        }
    }

    /// Parse tool name from string (case-insensitive)
    pub fn from_name(name: &str) -> Option<Tool> {
        let name = name.to_lowercase();
        Tool::all().iter().copied().find(|tool| tool.id() == name)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Tool {
    type Err = VersaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::from_name(s).ok_or_else(|| VersaError::UnknownTool(s.to_string()))
    }
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_output_paths() {
        assert_eq!(Tool::Cursor.output_path(), ".cursorrules");
        assert_eq!(Tool::Windsurf.output_path(), ".windsurf/config.json");
    }

    #[test]
    fn test_tool_from_name() {
        assert_eq!(Tool::from_name("cursor"), Some(Tool::Cursor));
        assert_eq!(Tool::from_name("WindSurf"), Some(Tool::Windsurf));
        assert_eq!(Tool::from_name("unknown"), None);
    }

    #[test]
    fn test_tool_from_str_error() {
        let err = "vim".parse::<Tool>().unwrap_err();
        assert!(matches!(err, VersaError::UnknownTool(name) if name == "vim"));
    }

    #[test]
    fn test_tool_formats() {
        assert_eq!(Tool::Cursor.format(), OutputFormat::Markdown);
        assert_eq!(Tool::Windsurf.format(), OutputFormat::Json);
        assert_eq!(Tool::Windsurf.format().to_string(), "json");
    }
}
