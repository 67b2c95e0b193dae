//! @acp:module "Tool Adapters"
//! @acp:summary "Built-in adapters for all supported AI tools"
//! @acp:domain cli
//! @acp:layer service

mod cursor;
mod windsurf;

pub use cursor::CursorAdapter;
pub use windsurf::{WindsurfAdapter, WINDSURF_CONFIG_VERSION};
