use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_TITLE: &str = "Player Search - IPL Auction";
pub const DEFAULT_SPLASH_MS: u64 = 2000;

/// Search IPL auction records by player name.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CSV file with a "Player Name" column (and optionally "Year").
    #[arg(env = "PLAYER_SEARCH_CSV")]
    pub csv: Option<PathBuf>,

    /// Image shown while the application starts.
    #[arg(long, env = "PLAYER_SEARCH_SPLASH")]
    pub splash: Option<PathBuf>,

    /// How long the splash screen stays up, in milliseconds.
    #[arg(long = "splash-ms", env = "PLAYER_SEARCH_SPLASH_MS")]
    pub splash_ms: Option<u64>,

    /// Skip the splash screen.
    #[arg(long)]
    pub no_splash: bool,

    /// JSON file with default settings.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Settings read from `--config`. Relative paths are relative to the
/// config file itself.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub csv_path: Option<PathBuf>,
    pub splash_image: Option<PathBuf>,
    pub splash_ms: Option<u64>,
    pub window_title: Option<String>,
}

impl FileConfig {
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: FileConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.csv_path = config.csv_path.map(|p| base.join(p));
            config.splash_image = config.splash_image.map(|p| base.join(p));
        }
        Ok(config)
    }
}

/// Resolved settings: command line, then environment, then config file,
/// then defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `None` means ask the user with a file picker.
    pub csv_path: Option<PathBuf>,
    pub splash_image: Option<PathBuf>,
    /// Zero disables the splash screen.
    pub splash_duration: Duration,
    pub window_title: String,
}

impl Config {
    /// Parse the process arguments and environment.
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => {
                log::info!("Using config file {}", path.display());
                FileConfig::read(path)?
            }
            None => FileConfig::default(),
        };
        Ok(Self::resolve(args, file))
    }

    pub fn resolve(args: Args, file: FileConfig) -> Self {
        let splash_ms = if args.no_splash {
            0
        } else {
            args.splash_ms
                .or(file.splash_ms)
                .unwrap_or(DEFAULT_SPLASH_MS)
        };

        Config {
            csv_path: args.csv.or(file.csv_path),
            splash_image: args.splash.or(file.splash_image),
            splash_duration: Duration::from_millis(splash_ms),
            window_title: file
                .window_title
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        }
    }
}
