#![forbid(unsafe_code)]

//! @acp:module "VERSA Adapters Library"
//! @acp:summary "Transform a VERSA context into AI tool configuration formats"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # VERSA Adapters
//!
//! One canonical AI-assistant context, rendered for each editor that needs it.
//!
//! ## Features
//!
//! - **Cursor**: markdown `.cursorrules` with guidelines, files and constraints
//! - **Windsurf**: `.windsurf/config.json` with model, context and permissions
//! - **Pure adapters**: no I/O, no shared state, safe to call from any thread
//! - **Lenient input**: malformed optional fields are dropped, never fatal
//!
//! ## Example
//!
//! ```rust
//! use versa::{get_adapter, Context, ToolAdapter};
//!
//! let context = Context::from_json_str(r#"{"version": "1.0", "metadata": {"name": "Demo"}}"#)?;
//! let adapter = get_adapter("cursor").expect("cursor adapter is registered");
//!
//! let rules = adapter.generate(&context);
//! assert!(rules.contains("# Demo"));
//! assert!(adapter.validate(&rules).valid);
//! # Ok::<(), versa::VersaError>(())
//! ```

pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod sync;

// Re-exports
pub use config::Config;
pub use context::{CommandPermissions, Context, FilePermissions, Metadata, Permissions, Settings};
pub use error::{Result, VersaError};
pub use sync::{
    adapter_for, get_adapter, list_adapters, Adapter, AdapterMetadata, AdapterOptions,
    CursorAdapter, OutputFormat, SyncAction, SyncExecutor, SyncResult, Tool, ToolAdapter,
    ValidationResult, WindsurfAdapter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
