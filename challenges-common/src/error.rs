//! Error type for building documents from external input.

use thiserror::Error;

/// Errors raised while constructing shared data types.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not a well-formed JSON document.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
