//! @acp:module "Init Command"
//! @acp:summary "Write a default .versa.config.json"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Config file to create
    pub config_path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.config_path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let config = Config::default();
    config.save(&options.config_path)?;

    println!(
        "{} Created {}",
        style("✓").green(),
        options.config_path.display()
    );
    println!("  Context: {}", config.context.display());
    println!("  Tools:   {}", config.tools.join(", "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".versa.config.json");

        execute_init(InitOptions {
            config_path: path.clone(),
            force: false,
        })
        .unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
