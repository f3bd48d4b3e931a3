//! CLI argument definitions for dropfill

use clap::Parser;
use dropfill::TrailingSeparator;
use std::path::PathBuf;

/// Every flag is optional; a bare `dropfill` runs with the configured defaults.
#[derive(Parser, Debug, Default)]
#[command(name = "dropfill")]
#[command(about = "Propose missing skillbook drop_data rows", long_about = None)]
pub struct Cli {
    /// Path to the drop_data SQLite database
    #[arg(short, long, env = "DROPFILL_DATABASE")]
    pub database: Option<PathBuf>,

    /// Path to monster stats (JSON or YAML map of monster id to level/boss)
    #[arg(short, long)]
    pub stats: Option<PathBuf>,

    /// Output path for the generated SQL (overwritten if it exists)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How the last row is terminated: keep, trim or semicolon
    #[arg(long)]
    pub trailing_separator: Option<TrailingSeparator>,

    /// Config file (defaults to <config dir>/dropfill/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the resolved settings and exit
    #[arg(long)]
    pub show_config: bool,
}
