//! @acp:module "List Command"
//! @acp:summary "Show registered adapters"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::sync::{registry, AdapterMetadata, ToolAdapter};

/// Options for the list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Output as JSON
    pub json: bool,
}

/// Execute the list command
pub fn execute_list(options: ListOptions) -> Result<()> {
    let metadata: Vec<AdapterMetadata> = registry::adapters().map(|a| a.metadata()).collect();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    for entry in &metadata {
        println!(
            "{} {} ({} v{})",
            style(entry.tool).bold(),
            style(entry.output_format).dim(),
            entry.name,
            entry.version
        );
        println!("  {}", entry.description);
    }

    Ok(())
}
