//! @acp:module "Tool Sync"
//! @acp:summary "Render a VERSA context into AI tool configuration files"
//! @acp:domain cli
//! @acp:layer service
//!
//! This module implements the adapter layer and the file sync built on top of it.
//!
//! ## Overview
//!
//! Each adapter is a pure function from a [`Context`] to the native text format
//! of one tool. The registry maps tool identifiers to adapters, and the
//! [`SyncExecutor`] writes rendered output to the tool's expected location.
//!
//! ## Supported Tools
//!
//! - Cursor (.cursorrules, markdown)
//! - Windsurf (.windsurf/config.json, JSON)

pub mod adapter;
pub mod adapters;
pub mod helpers;
pub mod registry;
pub mod tool;

use std::path::PathBuf;

pub use adapter::{AdapterMetadata, AdapterOptions, ToolAdapter, ValidationResult};
pub use adapters::{CursorAdapter, WindsurfAdapter};
pub use registry::{adapter_for, get_adapter, list_adapters, Adapter};
pub use tool::{OutputFormat, Tool};

use crate::context::Context;
use crate::error::{Result, VersaError};

/// Transform a context for one tool and validate the output
pub fn render(tool: Tool, context: &Context, options: &AdapterOptions) -> Result<String> {
    let adapter = adapter_for(tool);
    let output = adapter.transform(context, options);

    let report = adapter.validate(&output);
    for warning in &report.warnings {
        tracing::warn!("{}: {}", tool, warning);
    }
    if !report.valid {
        return Err(VersaError::Validation(report.errors));
    }

    Ok(output)
}

/// Main sync executor - writes rendered tool files under a project root
pub struct SyncExecutor {
    root: PathBuf,
}

impl SyncExecutor {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Where the given tool's file is written
    pub fn output_path(&self, tool: Tool) -> PathBuf {
        self.root.join(tool.output_path())
    }

    /// Render and write a single tool's file
    pub fn sync_tool(
        &self,
        tool: Tool,
        context: &Context,
        options: &AdapterOptions,
    ) -> Result<SyncResult> {
        let content = render(tool, context, options)?;
        let output_path = self.output_path(tool);

        // Create parent directories if needed
        if let Some(parent) = output_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let action = if output_path.exists() {
            let existing = std::fs::read_to_string(&output_path)?;
            if existing == content {
                SyncAction::Unchanged
            } else {
                std::fs::write(&output_path, &content)?;
                SyncAction::Updated
            }
        } else {
            std::fs::write(&output_path, &content)?;
            SyncAction::Created
        };

        tracing::info!("{} {:?}: {}", tool, action, output_path.display());

        Ok(SyncResult {
            tool,
            output_path,
            action,
        })
    }

    /// Sync every given tool; one result per tool, in order
    pub fn sync_all(
        &self,
        tools: &[Tool],
        context: &Context,
        options: &AdapterOptions,
    ) -> Vec<Result<SyncResult>> {
        tools
            .iter()
            .map(|tool| self.sync_tool(*tool, context, options))
            .collect()
    }
}

/// Result of syncing a tool
#[derive(Debug)]
pub struct SyncResult {
    pub tool: Tool,
    pub output_path: PathBuf,
    pub action: SyncAction,
}

/// Action taken during sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// File was created
    Created,
    /// Existing file was overwritten with new content
    Updated,
    /// Existing file already had the rendered content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Metadata;
    use tempfile::TempDir;

    fn named(name: &str) -> Context {
        Context {
            metadata: Some(Metadata {
                name: Some(name.into()),
                description: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_rejects_empty_output() {
        let options = AdapterOptions::default().with_comments(false);
        let err = render(Tool::Cursor, &Context::default(), &options).unwrap_err();
        assert!(matches!(err, VersaError::Validation(ref errors) if errors == &["Output is empty"]));
    }

    #[test]
    fn test_sync_creates_file() {
        let temp = TempDir::new().unwrap();
        let executor = SyncExecutor::new(temp.path());

        let result = executor
            .sync_tool(Tool::Windsurf, &named("Demo"), &AdapterOptions::default())
            .unwrap();

        assert_eq!(result.action, SyncAction::Created);
        assert_eq!(result.output_path, temp.path().join(".windsurf/config.json"));

        let content = std::fs::read_to_string(&result.output_path).unwrap();
        assert!(content.contains("\"name\": \"Demo\""));
    }

    #[test]
    fn test_sync_updates_and_detects_unchanged() {
        let temp = TempDir::new().unwrap();
        let executor = SyncExecutor::new(temp.path());
        let options = AdapterOptions::default();

        executor.sync_tool(Tool::Cursor, &named("One"), &options).unwrap();

        let same = executor.sync_tool(Tool::Cursor, &named("One"), &options).unwrap();
        assert_eq!(same.action, SyncAction::Unchanged);

        let changed = executor.sync_tool(Tool::Cursor, &named("Two"), &options).unwrap();
        assert_eq!(changed.action, SyncAction::Updated);

        let content = std::fs::read_to_string(temp.path().join(".cursorrules")).unwrap();
        assert!(content.contains("# Two"));
        assert!(!content.contains("# One"));
    }

    #[test]
    fn test_sync_all() {
        let temp = TempDir::new().unwrap();
        let executor = SyncExecutor::new(temp.path());

        let results = executor.sync_all(Tool::all(), &named("Both"), &AdapterOptions::default());

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_ok()));
        assert!(temp.path().join(".cursorrules").exists());
        assert!(temp.path().join(".windsurf/config.json").exists());
    }
}
