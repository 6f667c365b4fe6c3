use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sparkify_etl::config::{AppConfig, CliConfig, FileConfig};
use sparkify_etl::warehouse::WAREHOUSE_SCHEMA;
use sparkify_etl::SqliteWarehouse;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path = PathBuf::from(s);
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path))
}

/// Drops the warehouse tables and creates them again, empty.
#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its `db_path` overrides `--db-path`.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite warehouse database file.
    #[clap(long, value_parser = parse_path)]
    pub db_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        db_path: cli_args.db_path,
        ..Default::default()
    };
    let db_path = AppConfig::resolve_db_path(&cli_config, file_config);

    let warehouse = SqliteWarehouse::recreate(&db_path)?;
    for table in WAREHOUSE_SCHEMA.tables {
        info!("  {}", table.name);
    }
    info!("Warehouse tables ready in {:?}", warehouse.db_path());
    Ok(())
}
