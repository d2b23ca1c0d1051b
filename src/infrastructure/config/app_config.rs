//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infrastructure::recipes::DEFAULT_RECIPES_URL;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration from file and CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// File this configuration was loaded from.
    #[serde(skip)]
    pub source: Option<PathBuf>,

    /// Recipe list endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Directory for cached images. Defaults to the per-user cache dir.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Listing configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Listing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Download and cache recipe images while listing.
    #[serde(default = "default_true")]
    pub fetch_images: bool,

    /// Show recipe descriptions.
    #[serde(default)]
    pub expanded: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fetch_images: true,
            expanded: false,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_RECIPES_URL.to_string()
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    ///
    /// `--config` is not merged; it picks the file before loading.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = args.api_url {
            self.api_url = api_url;
        }
        if let Some(cache_dir) = args.cache_dir {
            self.cache_dir = Some(cache_dir);
        }
        if let Some(fetch_images) = args.fetch_images {
            self.display.fetch_images = fetch_images;
        }
        if let Some(expanded) = args.expanded {
            self.display.expanded = expanded;
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: None,
            api_url: default_api_url(),
            cache_dir: None,
            log_path: None,
            log_level: LogLevel::Info,
            display: DisplayConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            api_url = "http://localhost:8080/recipes.json"
            log_level = "debug"

            [display]
            expanded = true
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.api_url, "http://localhost:8080/recipes.json");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.display.expanded);
        assert!(config.display.fetch_images); // default_true
        assert_eq!(config.cache_dir, None);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api_url, DEFAULT_RECIPES_URL);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.display.fetch_images);
        assert!(!config.display.expanded);
    }

    #[test]
    fn test_cli_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "recipebox",
            "--cache-dir",
            "/tmp/recipebox-images",
            "--fetch-images",
            "false",
            "--log-level",
            "warn",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/recipebox-images")));
        assert!(!config.display.fetch_images);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.api_url, DEFAULT_RECIPES_URL);
    }
}
