//! @acp:module "Validate Command"
//! @acp:summary "Check an existing tool output file with its adapter"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use console::style;

use crate::sync::{adapter_for, Tool, ToolAdapter, ValidationResult};

/// Options for the validate command
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Tool whose adapter validates the file
    pub tool: String,
    /// File to validate
    pub file: PathBuf,
}

/// Run the adapter's validation over a file
pub fn validate_file(options: &ValidateOptions) -> Result<ValidationResult> {
    let tool: Tool = options.tool.parse()?;
    let content = std::fs::read_to_string(&options.file)
        .with_context(|| format!("Failed to read {}", options.file.display()))?;
    Ok(adapter_for(tool).validate(&content))
}

/// Execute the validate command
pub fn execute_validate(options: ValidateOptions) -> Result<()> {
    let report = validate_file(&options)?;

    for warning in &report.warnings {
        eprintln!("{} {}", style("!").yellow(), warning);
    }

    if report.valid {
        println!(
            "{} {} is a valid {} file",
            style("✓").green(),
            options.file.display(),
            options.tool.to_lowercase()
        );
    } else {
        for error in &report.errors {
            eprintln!("{} {}", style("✗").red(), error);
        }
        std::process::exit(1);
    }

    Ok(())
}
