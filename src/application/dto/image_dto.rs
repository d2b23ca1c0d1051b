//! Image request DTOs.

use crate::domain::entities::LoadedImage;

/// Message sent when an image request finishes.
#[derive(Debug, Clone)]
pub struct ImageLoadedEvent {
    /// The URL that was requested.
    pub url: String,
    /// The acquired image, or None if it could not be obtained.
    pub result: Option<LoadedImage>,
}

impl ImageLoadedEvent {
    /// Returns true if the image was acquired.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.result.is_some()
    }
}
