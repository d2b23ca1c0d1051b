//! Recipe endpoint error types.

use thiserror::Error;

/// Errors raised while fetching the recipe list.
///
/// The display strings are the messages shown to the user in the
/// error state of the list.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum RecipeError {
    #[error("An IO error occurred: {message}")]
    Io { message: String },

    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("An error occurred: HTTP Request failed with response code {status}")]
    Status { status: u16 },

    #[error("An error occurred: {message}")]
    Unexpected { message: String },
}

impl RecipeError {
    /// Creates io error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}
