//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod init;
pub mod list;
pub mod sync;
pub mod transform;
pub mod validate;

pub use init::{execute_init, InitOptions};
pub use list::{execute_list, ListOptions};
pub use sync::{execute_sync, SyncOptions};
pub use transform::{execute_transform, TransformOptions};
pub use validate::{execute_validate, validate_file, ValidateOptions};
