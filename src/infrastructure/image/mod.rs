//! Image handling infrastructure.
//!
//! This module provides:
//! - Disk storage of decoded images as PNG files
//! - HTTP download and decode of remote images

pub mod disk_store;
pub mod http_fetcher;

pub use disk_store::DiskImageStore;
pub use http_fetcher::HttpImageFetcher;
