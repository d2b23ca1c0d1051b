//! Port definition for downloading images.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ImageResult;

/// Port for fetching and decoding a remote image.
#[async_trait]
pub trait ImageFetcherPort: Send + Sync {
    /// Downloads `url` and decodes the body.
    ///
    /// Every failure (connection, status, body, decode) is reported as an
    /// error value; implementations never panic on bad input.
    async fn fetch(&self, url: &str) -> ImageResult<Arc<image::DynamicImage>>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Barrier;

    use crate::domain::errors::ImageError;

    /// Builds a small gradient image with distinct pixels.
    #[allow(clippy::cast_possible_truncation)]
    pub fn sample_image(width: u32, height: u32) -> image::DynamicImage {
        let buffer = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x * 40) as u8, (y * 40) as u8, ((x + y) * 20) as u8, 255])
        });
        image::DynamicImage::ImageRgba8(buffer)
    }

    /// Mock fetcher that counts calls.
    pub struct MockImageFetcher {
        image: Option<Arc<image::DynamicImage>>,
        calls: AtomicUsize,
        barrier: Option<Barrier>,
    }

    impl MockImageFetcher {
        /// Creates a fetcher that always returns `image`.
        pub fn returning(image: image::DynamicImage) -> Self {
            Self {
                image: Some(Arc::new(image)),
                calls: AtomicUsize::new(0),
                barrier: None,
            }
        }

        /// Creates a fetcher that always fails as if the host were unreachable.
        pub fn unreachable() -> Self {
            Self {
                image: None,
                calls: AtomicUsize::new(0),
                barrier: None,
            }
        }

        /// Holds every fetch until `parties` fetches are in flight.
        pub fn with_barrier(mut self, parties: usize) -> Self {
            self.barrier = Some(Barrier::new(parties));
            self
        }

        /// Number of `fetch` calls seen so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageFetcherPort for MockImageFetcher {
        async fn fetch(&self, url: &str) -> ImageResult<Arc<image::DynamicImage>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(barrier) = &self.barrier {
                barrier.wait().await;
            }
            self.image
                .clone()
                .ok_or_else(|| ImageError::network(format!("connection refused: {url}")))
        }
    }
}
