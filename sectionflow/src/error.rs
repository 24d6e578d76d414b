//! Layout error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("unknown layout mode: {0}")]
    UnknownMode(String),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
