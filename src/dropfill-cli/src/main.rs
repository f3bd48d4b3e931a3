mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use dropfill::{MonsterStatsMap, ReportWriter, SqliteDropStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::{Config, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dropfill=info,dropfill_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Config::load(cli.config.as_deref())?.resolve(&cli)?;

    if cli.show_config {
        print!(
            "{}",
            toml::to_string_pretty(&settings).context("Failed to serialize settings")?
        );
        return Ok(());
    }

    run(&settings)
}

fn run(settings: &Settings) -> Result<()> {
    let stats = MonsterStatsMap::load(&settings.stats)?;
    tracing::info!(
        "Loaded stats for {} monsters from {}",
        stats.len(),
        settings.stats.display()
    );

    let store = SqliteDropStore::open(&settings.database)?;
    tracing::info!(
        "Reading drop_data in {} from {}",
        settings.item_range,
        settings.database.display()
    );

    let writer = ReportWriter::new(settings.trailing_separator);
    dropfill::reconcile(
        store,
        &stats,
        settings.item_range,
        &writer,
        &settings.output,
    )?;

    Ok(())
}
