//! Loading state of the recipe list.

/// State of an asynchronously fetched value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecipeState<T> {
    /// Fetch has not completed yet.
    #[default]
    Loading,
    /// Fetch succeeded.
    Success(T),
    /// Fetch failed with a user-facing message.
    Error(String),
}

impl<T> RecipeState<T> {
    /// Returns true while still loading.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if the fetch succeeded.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if the fetch failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
