//! Image acquisition use case.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::domain::entities::{CacheKey, ImageSource, LoadedImage};
use crate::domain::errors::ImageResult;
use crate::domain::ports::{ImageFetcherPort, ImageStorePort};

/// Acquires images through the persistent store, falling back to the network.
///
/// A stored image is trusted forever: there is no freshness check and no
/// revalidation against the remote source. Concurrent calls for the same
/// cold URL are not merged; each one fetches and each one writes back.
#[derive(Clone)]
pub struct AcquireImageUseCase {
    store: Arc<dyn ImageStorePort>,
    fetcher: Arc<dyn ImageFetcherPort>,
}

impl AcquireImageUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(store: Arc<dyn ImageStorePort>, fetcher: Arc<dyn ImageFetcherPort>) -> Self {
        Self { store, fetcher }
    }

    /// Acquires the image for `url`, or None if it cannot be obtained.
    ///
    /// Never fails: network and decode errors collapse to None.
    pub async fn execute(&self, url: &str) -> Option<LoadedImage> {
        match self.try_execute(url).await {
            Ok(loaded) => Some(loaded),
            Err(e) => {
                debug!(url = %url, error = %e, "Image unavailable");
                None
            }
        }
    }

    /// Acquires the image for `url`, reporting why it could not be obtained.
    ///
    /// Priority:
    /// 1. Persistent store
    /// 2. Network, written back to the store on success
    ///
    /// # Errors
    /// Returns the fetcher's error when the store misses and the fetch fails.
    /// A failed write-back is logged and does not turn into an error.
    pub async fn try_execute(&self, url: &str) -> ImageResult<LoadedImage> {
        let key = CacheKey::from_url(url);

        if let Some(image) = self.store.load(&key).await {
            trace!(key = %key, "Serving image from store");
            return Ok(LoadedImage {
                key,
                image,
                source: ImageSource::DiskCache,
            });
        }

        let image = self.fetcher.fetch(url).await?;

        if let Err(e) = self.store.store(&key, &image).await {
            warn!(key = %key, error = %e, "Failed to write image to store");
        }

        debug!(key = %key, source = "network", "Image acquired");
        Ok(LoadedImage {
            key,
            image,
            source: ImageSource::Network,
        })
    }
}
