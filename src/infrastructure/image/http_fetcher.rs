//! HTTP image fetcher.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, error};

use crate::domain::errors::{ImageError, ImageResult};
use crate::domain::ports::ImageFetcherPort;

/// Downloads images with a plain GET and decodes the body.
///
/// No headers or query parameters are added, and nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    /// Creates a fetcher with a default HTTP client.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new() -> ImageResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ImageError::network(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self::with_client(client))
    }

    /// Creates a fetcher that shares an existing client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn download(&self, url: &str) -> ImageResult<Bytes> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status {
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| ImageError::network(format!("Failed to read body: {e}")))
    }
}

#[async_trait]
impl ImageFetcherPort for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> ImageResult<Arc<image::DynamicImage>> {
        debug!(url = %url, "Downloading image");
        let bytes = self.download(url).await?;
        let size = bytes.len();

        let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Decode task panicked");
                ImageError::decode(format!("Decode task panicked: {e}"))
            })?
            .map_err(|e| ImageError::decode(e.to_string()))?;

        debug!(url = %url, size, width = decoded.width(), height = decoded.height(), "Downloaded image");
        Ok(Arc::new(decoded))
    }
}
