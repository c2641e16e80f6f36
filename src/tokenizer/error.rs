//! Tokenizer error types.

use thiserror::Error;

/// Tokenizer errors
#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("Empty vocabulary")]
    EmptyVocab,

    #[error("Invalid token ID: {0}")]
    InvalidTokenId(u32),

    #[error("Word collides with a reserved token id: {0}")]
    ReservedId(String),
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;
