//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Image storage and download.
pub mod image;
/// Recipe endpoint client.
pub mod recipes;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigFile, DisplayConfig, LogLevel};
pub use image::{DiskImageStore, HttpImageFetcher};
pub use recipes::{DEFAULT_RECIPES_URL, RecipeApiClient};
