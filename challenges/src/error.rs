//! Errors for the checked entry points.
//!
//! The plain operations cannot fail for well-typed input; these cover
//! signed call limits and documents parsed from text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("call limit must be non-negative, got {0}")]
    NegativeCallLimit(i64),

    #[error(transparent)]
    Value(#[from] challenges_common::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
