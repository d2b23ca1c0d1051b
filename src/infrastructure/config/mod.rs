//! Application configuration.

/// Configuration values and their defaults.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Config file location and persistence.
pub mod storage;

pub use app_config::{AppConfig, DisplayConfig, LogLevel};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigFile};
