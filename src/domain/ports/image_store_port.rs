//! Port definition for persistent image storage.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::CacheKey;
use crate::domain::errors::ImageResult;

/// Port for a keyed image store that survives restarts.
/// Implementations must be thread-safe.
#[async_trait]
pub trait ImageStorePort: Send + Sync {
    /// Loads and decodes the image stored under `key`.
    /// Returns None on a miss or if the stored blob cannot be decoded.
    async fn load(&self, key: &CacheKey) -> Option<Arc<image::DynamicImage>>;

    /// Encodes `image` and stores it under `key`, replacing any previous entry.
    async fn store(&self, key: &CacheKey, image: &image::DynamicImage) -> ImageResult<()>;
}
