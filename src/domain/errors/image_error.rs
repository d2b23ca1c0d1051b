//! Image pipeline error types.

use thiserror::Error;

/// Result type for image store and fetcher operations.
pub type ImageResult<T> = std::result::Result<T, ImageError>;

/// Errors raised while storing, loading or fetching images.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum ImageError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("failed to encode image: {message}")]
    Encode { message: String },

    #[error("failed to decode image: {message}")]
    Decode { message: String },

    #[error("request failed: {message}")]
    Network { message: String },

    #[error("server responded with HTTP {status}")]
    Status { status: u16 },
}

impl ImageError {
    /// Creates io error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates encode error.
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Returns whether the error came from the remote side.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }
}
