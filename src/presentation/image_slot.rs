//! Display state of a recipe image.

use crate::domain::entities::{ImageSource, LoadedImage};

/// What a row shows in place of its image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSlot {
    /// Acquisition pending; a loading indicator is shown.
    #[default]
    Loading,
    /// Image acquired.
    Ready {
        /// Pixel width.
        width: u32,
        /// Pixel height.
        height: u32,
        /// Where the image came from.
        source: ImageSource,
    },
    /// Acquisition failed; a placeholder is shown until a new request.
    Absent,
}

impl ImageSlot {
    /// Builds the slot for a finished acquisition.
    #[must_use]
    pub fn from_result(result: Option<&LoadedImage>) -> Self {
        result.map_or(Self::Absent, |loaded| {
            let (width, height) = loaded.dimensions();
            Self::Ready {
                width,
                height,
                source: loaded.source,
            }
        })
    }

    /// Returns true once an image is available.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

impl std::fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading..."),
            Self::Ready {
                width,
                height,
                source,
            } => write!(f, "{width}x{height} ({source})"),
            Self::Absent => write!(f, "unavailable"),
        }
    }
}
