//! @acp:module "Errors"
//! @acp:summary "Error types for context loading, configuration and sync"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

/// Errors raised outside the pure adapter core
#[derive(Debug, Error)]
pub enum VersaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid input shape: {0}")]
    InvalidInput(String),

    #[error("Output failed validation: {}", .0.join("; "))]
    Validation(Vec<String>),
}

pub type Result<T> = std::result::Result<T, VersaError>;
