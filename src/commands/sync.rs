//! @acp:module "Sync Command"
//! @acp:summary "Write every configured tool's file from one context"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use console::style;

use crate::context::Context;
use crate::sync::{self, AdapterOptions, SyncAction, SyncExecutor, Tool};

/// Options for the sync command
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Project root to write into
    pub root: PathBuf,
    /// Context document to read
    pub context: PathBuf,
    /// Tools to sync
    pub tools: Vec<Tool>,
    /// Adapter rendering options
    pub adapter: AdapterOptions,
    /// Render and report without writing
    pub dry_run: bool,
}

/// Execute the sync command
pub fn execute_sync(options: SyncOptions) -> Result<()> {
    let context = Context::load(&options.context)
        .with_context(|| format!("Failed to load context from {}", options.context.display()))?;
    let executor = SyncExecutor::new(&options.root);

    if options.dry_run {
        for tool in &options.tools {
            let output = sync::render(*tool, &context, &options.adapter)?;
            println!(
                "{} {} -> {} ({} bytes)",
                style("•").cyan(),
                tool,
                executor.output_path(*tool).display(),
                output.len()
            );
        }
        return Ok(());
    }

    let mut failures = 0;
    for (tool, result) in options
        .tools
        .iter()
        .zip(executor.sync_all(&options.tools, &context, &options.adapter))
    {
        match result {
            Ok(result) => {
                let verb = match result.action {
                    SyncAction::Created => "Created",
                    SyncAction::Updated => "Updated",
                    SyncAction::Unchanged => "Unchanged",
                };
                println!(
                    "{} {} {}",
                    style("✓").green(),
                    verb,
                    result.output_path.display()
                );
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", style("✗").red(), tool, e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} tools failed to sync", failures, options.tools.len());
    }

    Ok(())
}
