//! @acp:module "Transform Command"
//! @acp:summary "Render a context for a single tool"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use console::style;

use crate::context::Context;
use crate::sync::{self, AdapterOptions, Tool};

/// Options for the transform command
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Target tool identifier
    pub tool: String,
    /// Context document to read
    pub context: PathBuf,
    /// Adapter rendering options
    pub adapter: AdapterOptions,
    /// Write to this file instead of stdout
    pub output: Option<PathBuf>,
}

/// Execute the transform command
pub fn execute_transform(options: TransformOptions) -> Result<()> {
    let tool: Tool = options.tool.parse()?;
    let context = Context::load(&options.context)
        .with_context(|| format!("Failed to load context from {}", options.context.display()))?;

    tracing::debug!("Transforming {} for {}", options.context.display(), tool);
    let output = sync::render(tool, &context, &options.adapter)?;

    match options.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Wrote {} config to {}", style("✓").green(), tool, path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_transform_writes_output_file() {
        let temp = TempDir::new().unwrap();
        let context_path = temp.path().join("context.json");
        std::fs::write(&context_path, r#"{"version": "1.0", "metadata": {"name": "Cli"}}"#).unwrap();
        let output = temp.path().join("out/.cursorrules");

        execute_transform(TransformOptions {
            tool: "CURSOR".into(),
            context: context_path,
            adapter: AdapterOptions::default(),
            output: Some(output.clone()),
        })
        .unwrap();

        let content = std::fs::read_to_string(output).unwrap();
        assert!(content.contains("# Cli"));
    }

    #[test]
    fn test_transform_unknown_tool() {
        let err = execute_transform(TransformOptions {
            tool: "vim".into(),
            context: PathBuf::from("missing.json"),
            adapter: AdapterOptions::default(),
            output: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("Unknown tool: vim"));
    }
}
