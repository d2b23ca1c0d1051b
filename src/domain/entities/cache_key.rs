//! Cache keys derived from image URLs.

/// File name used when a URL has no usable final segment.
pub const DEFAULT_CACHE_KEY: &str = "default_filename.png";

/// Name of a cached image blob inside the cache directory.
///
/// Derived from the last `/`-separated segment of the source URL, so two
/// URLs that end in the same segment share one entry regardless of host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Creates a key from a raw file name.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derives the key for a URL from its last path segment.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        match url.rsplit('/').next() {
            Some(segment) if !segment.is_empty() && segment != "." && segment != ".." => {
                Self::new(segment)
            }
            _ => Self::new(DEFAULT_CACHE_KEY),
        }
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CacheKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
