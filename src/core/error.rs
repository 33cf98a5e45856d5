//! Error type shared by every game operation
//!
//! Absence of a result is never an error: searches that find nothing return
//! empty collections so callers can tell "no result" from "bad request".

use thiserror::Error;

/// Errors raised by lexicon, board and search operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Ill-formed input such as a zero minimum length or a non-square board
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A lexicon query was made before any lexicon was loaded
    #[error("lexicon has not been loaded")]
    Uninitialized,
}

impl GameError {
    /// Build an `InvalidArgument` error from anything displayable
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

/// Validate a minimum word length, which must be at least one character
///
/// # Errors
/// Returns `GameError::InvalidArgument` when `min_length` is zero.
pub fn check_min_length(min_length: usize) -> Result<(), GameError> {
    if min_length < 1 {
        return Err(GameError::invalid(format!(
            "minimum word length must be at least 1, got {min_length}"
        )));
    }
    Ok(())
}
