//! Error types for formula analysis

use thiserror::Error;

/// Error produced when formula text cannot be tokenized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid formula at offset {pos}: {reason}")]
pub struct TokenizeError {
    /// Character offset into the formula text where scanning failed
    pub pos: usize,
    /// What the tokenizer could not make sense of
    pub reason: String,
}

impl TokenizeError {
    pub(crate) fn new(pos: usize, reason: impl Into<String>) -> Self {
        Self {
            pos,
            reason: reason.into(),
        }
    }
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, TokenizeError>;
