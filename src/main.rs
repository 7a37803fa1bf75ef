use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

mod config;
mod db;
mod error;
mod lookup;
mod models;
mod output;

use config::Config;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "feature-lookup")]
#[command(version, about = "Print one feature record from a local SQLite store")]
struct Cli {
    /// Id of the feature to look up
    id: i64,

    /// Path to the store (defaults to features.db, or db_path from the config)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Name of the features table; matched case-insensitively
    #[arg(long)]
    table: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout only carries the record
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    let db_path = cli.db.unwrap_or_else(|| PathBuf::from(&config.db_path));
    let table = cli.table.unwrap_or(config.table);
    let format = cli.format.unwrap_or(config.format);

    let mut stdout = io::stdout().lock();
    lookup::run(&db_path, &table, cli.id, format, &mut stdout)
        .with_context(|| format!("feature lookup failed for {}", db_path.display()))?;

    Ok(())
}
