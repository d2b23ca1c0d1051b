//! Disk-backed image store for persistence across sessions.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, trace, warn};

use crate::domain::entities::CacheKey;
use crate::domain::errors::{ImageError, ImageResult};
use crate::domain::ports::ImageStorePort;

/// Image store that keeps one PNG file per cache key.
///
/// Entries are never evicted; the directory grows with every new key.
/// There is no locking, so concurrent writers to one key race and the
/// last completed write wins.
#[derive(Debug)]
pub struct DiskImageStore {
    cache_dir: PathBuf,
}

impl DiskImageStore {
    /// Creates a store rooted at `cache_dir`, creating the directory.
    ///
    /// # Errors
    /// Returns error if the cache directory cannot be created.
    pub async fn new(cache_dir: PathBuf) -> ImageResult<Self> {
        fs::create_dir_all(&cache_dir)
            .await
            .map_err(|e| ImageError::io(format!("Failed to create cache dir: {e}")))?;
        debug!(path = %cache_dir.display(), "Image store ready");
        Ok(Self { cache_dir })
    }

    /// Creates a store in the default per-user cache location.
    ///
    /// # Errors
    /// Returns error if the cache directory cannot be created.
    pub async fn default_location() -> ImageResult<Self> {
        Self::new(default_cache_dir()).await
    }

    /// Returns the directory holding the cached files.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns the path of the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.cache_dir.join(key.as_str())
    }

    /// Checks if an entry exists for `key`.
    pub async fn contains(&self, key: &CacheKey) -> bool {
        fs::try_exists(self.path_for(key)).await.unwrap_or(false)
    }

    async fn read_bytes(&self, key: &CacheKey) -> Option<Vec<u8>> {
        let path = self.path_for(key);
        match fs::read(&path).await {
            Ok(bytes) => {
                trace!(key = %key, path = %path.display(), "Image store hit");
                Some(bytes)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                trace!(key = %key, "Image store miss");
                None
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read cached image");
                None
            }
        }
    }

    async fn write_bytes(&self, key: &CacheKey, bytes: &[u8]) -> ImageResult<()> {
        let path = self.path_for(key);

        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| ImageError::io(format!("Failed to create cache file: {e}")))?;

        file.write_all(bytes)
            .await
            .map_err(|e| ImageError::io(format!("Failed to write cache file: {e}")))?;

        file.flush()
            .await
            .map_err(|e| ImageError::io(format!("Failed to flush cache file: {e}")))?;

        debug!(key = %key, path = %path.display(), size = bytes.len(), "Stored image");
        Ok(())
    }
}

#[async_trait]
impl ImageStorePort for DiskImageStore {
    async fn load(&self, key: &CacheKey) -> Option<Arc<image::DynamicImage>> {
        let bytes = self.read_bytes(key).await?;

        let result = tokio::task::spawn_blocking(move || {
            image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        })
        .await;

        match result {
            Ok(Ok(img)) => {
                debug!(key = %key, "Decoded image from store");
                Some(Arc::new(img))
            }
            Ok(Err(e)) => {
                warn!(key = %key, error = %e, "Failed to decode cached image");
                None
            }
            Err(e) => {
                error!(key = %key, error = %e, "Decode task panicked");
                None
            }
        }
    }

    async fn store(&self, key: &CacheKey, image: &image::DynamicImage) -> ImageResult<()> {
        let image = image.clone();
        let encoded = tokio::task::spawn_blocking(move || -> ImageResult<Vec<u8>> {
            let mut buffer = Cursor::new(Vec::new());
            image
                .write_to(&mut buffer, image::ImageFormat::Png)
                .map_err(|e| ImageError::encode(e.to_string()))?;
            Ok(buffer.into_inner())
        })
        .await
        .map_err(|e| ImageError::encode(format!("Encode task panicked: {e}")))??;

        self.write_bytes(key, &encoded).await
    }
}

/// Returns the default cache directory path.
fn default_cache_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "recipebox", "recipebox").map_or_else(
        || {
            std::env::temp_dir()
                .join("recipebox")
                .join("cache")
                .join("images")
        },
        |dirs| dirs.cache_dir().join("images"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::sample_image;
    use tempfile::TempDir;
    use tokio_test::{assert_err, assert_ok};

    async fn create_test_store() -> (DiskImageStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = DiskImageStore::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_store_and_load_is_pixel_identical() {
        let (store, _temp) = create_test_store().await;
        let key = CacheKey::new("53314276ff604d28828b456b.jpg");
        let original = sample_image(5, 3);

        assert_ok!(store.store(&key, &original).await);
        let loaded = store.load(&key).await.unwrap();

        assert_eq!(loaded.width(), 5);
        assert_eq!(loaded.height(), 3);
        assert_eq!(loaded.to_rgba8().as_raw(), original.to_rgba8().as_raw());
    }

    #[tokio::test]
    async fn test_load_miss() {
        let (store, _temp) = create_test_store().await;

        assert!(store.load(&CacheKey::new("nonexistent.png")).await.is_none());
    }

    #[tokio::test]
    async fn test_file_named_by_key() {
        let (store, temp) = create_test_store().await;
        let key = CacheKey::new("thumb.jpg");

        store.store(&key, &sample_image(2, 2)).await.unwrap();

        assert!(temp.path().join("thumb.jpg").exists());
        assert!(store.contains(&key).await);
    }

    #[tokio::test]
    async fn test_store_overwrites() {
        let (store, _temp) = create_test_store().await;
        let key = CacheKey::new("a.png");

        store.store(&key, &sample_image(2, 2)).await.unwrap();
        store.store(&key, &sample_image(4, 1)).await.unwrap();

        let loaded = store.load(&key).await.unwrap();
        assert_eq!((loaded.width(), loaded.height()), (4, 1));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_miss() {
        let (store, temp) = create_test_store().await;
        std::fs::write(temp.path().join("broken.png"), b"not a png").unwrap();

        assert!(store.load(&CacheKey::new("broken.png")).await.is_none());
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let (store, temp) = create_test_store().await;
        std::fs::remove_dir_all(temp.path()).unwrap();

        let result = store.store(&CacheKey::new("a.png"), &sample_image(1, 1)).await;

        let err = assert_err!(result);
        assert!(matches!(err, ImageError::Io { .. }));
    }
}
