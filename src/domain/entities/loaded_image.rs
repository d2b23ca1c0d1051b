//! Domain types for acquired images.

use std::sync::Arc;

use super::CacheKey;

/// Where an acquired image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Read back from the on-disk cache.
    DiskCache,
    /// Downloaded from the network.
    Network,
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DiskCache => write!(f, "disk"),
            Self::Network => write!(f, "network"),
        }
    }
}

/// A decoded image together with its cache key and origin.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Cache entry the image is stored under.
    pub key: CacheKey,
    /// The decoded raster.
    pub image: Arc<image::DynamicImage>,
    /// Where the image was loaded from.
    pub source: ImageSource,
}

impl LoadedImage {
    /// Returns `(width, height)` of the decoded image.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}
