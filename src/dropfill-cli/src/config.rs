//! Configuration management for dropfill

use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use dropfill::{ItemIdRange, TrailingSeparator, DEFAULT_DB_PATH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_STATS_PATH: &str = "share/monster_stats.json";
pub const DEFAULT_OUTPUT_PATH: &str = "share/output/skillbook_drop_data.sql";

/// Values read from `config.toml`; anything unset falls back to a default
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub database: Option<PathBuf>,
    pub stats: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub trailing_separator: Option<TrailingSeparator>,
    pub item_range: Option<ItemIdRange>,
}

/// Fully resolved settings for one run
#[derive(Debug, Serialize, PartialEq)]
pub struct Settings {
    pub database: PathBuf,
    pub stats: PathBuf,
    pub output: PathBuf,
    pub trailing_separator: TrailingSeparator,
    pub item_range: ItemIdRange,
}

impl Config {
    /// Get the path to the default config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("dropfill");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. The default location is optional and
    /// yields an empty config when missing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::config_path() {
                Ok(p) if p.exists() => p,
                _ => return Ok(Config::default()),
            },
        };

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Merge with command-line flags. Flags win over the file.
    pub fn resolve(self, cli: &Cli) -> Result<Settings> {
        let item_range = self.item_range.unwrap_or_default();
        if item_range.is_empty() {
            bail!("Item range {} is empty", item_range);
        }

        Ok(Settings {
            database: cli
                .database
                .clone()
                .or(self.database)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            stats: cli
                .stats
                .clone()
                .or(self.stats)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_PATH)),
            output: cli
                .output
                .clone()
                .or(self.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            trailing_separator: cli
                .trailing_separator
                .or(self.trailing_separator)
                .unwrap_or_default(),
            item_range,
        })
    }
}
