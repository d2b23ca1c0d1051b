use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments. Values given here override the config file.
#[derive(Debug, Parser)]
#[command(
    name = "recipebox",
    version,
    about = "Lists recipes from a JSON feed and caches their images on disk",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Recipe list endpoint.
    #[arg(long, env = "RECIPEBOX_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory for cached images.
    #[arg(long, env = "RECIPEBOX_CACHE_DIR", value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Download and cache recipe images while listing.
    #[arg(long)]
    pub fetch_images: Option<bool>,

    /// Show recipe descriptions.
    #[arg(long)]
    pub expanded: Option<bool>,
}
