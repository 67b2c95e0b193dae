#![forbid(unsafe_code)]
//! VERSA Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use versa::commands::{
    execute_init, execute_list, execute_sync, execute_transform, execute_validate, InitOptions,
    ListOptions, SyncOptions, TransformOptions, ValidateOptions,
};
use versa::config::DEFAULT_CONFIG_PATH;
use versa::{Config, Tool};

#[derive(Parser)]
#[command(name = "versa")]
#[command(about = "Transform VERSA context into AI tool configuration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default .versa.config.json
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Render the context for a single tool
    Transform {
        /// Target tool (cursor, windsurf)
        tool: String,

        /// Context file (default: from config)
        #[arg(long)]
        context: Option<PathBuf>,

        /// Omit generator comments
        #[arg(long)]
        no_comments: bool,

        /// Compact structured output
        #[arg(long)]
        compact: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write every configured tool's file into the project root
    Sync {
        /// Context file (default: from config)
        #[arg(long)]
        context: Option<PathBuf>,

        /// Tools to sync (can specify multiple, default: from config)
        #[arg(short, long = "tool")]
        tools: Vec<String>,

        /// Show what would be written without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// List available adapters
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate an existing tool output file
    Validate {
        /// Tool whose rules apply
        tool: String,

        /// File to validate
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Init { force } => {
            execute_init(InitOptions {
                config_path: cli.config,
                force,
            })?;
        }

        Commands::Transform {
            tool,
            context,
            no_comments,
            compact,
            output,
        } => {
            let mut adapter = config.adapter_options();
            if no_comments {
                adapter.comments = false;
            }
            if compact {
                adapter.format = false;
            }

            execute_transform(TransformOptions {
                tool,
                context: context.unwrap_or_else(|| config.context_path()),
                adapter,
                output,
            })?;
        }

        Commands::Sync {
            context,
            tools,
            dry_run,
        } => {
            let tools = if tools.is_empty() {
                config.resolve_tools()?
            } else {
                tools
                    .iter()
                    .map(|t| t.parse::<Tool>())
                    .collect::<Result<Vec<_>, _>>()?
            };

            execute_sync(SyncOptions {
                root: config.root.clone(),
                context: context.unwrap_or_else(|| config.context_path()),
                tools,
                adapter: config.adapter_options(),
                dry_run,
            })?;
        }

        Commands::List { json } => {
            execute_list(ListOptions { json })?;
        }

        Commands::Validate { tool, file } => {
            execute_validate(ValidateOptions { tool, file })?;
        }
    }

    Ok(())
}
