use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sparkify_etl::config::{AppConfig, CliConfig, FileConfig};
use sparkify_etl::{process_data, process_log_file, process_song_file, SqliteWarehouse};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path = PathBuf::from(s);
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values set there override the flags below.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite warehouse database file.
    #[clap(long, value_parser = parse_path)]
    pub db_path: Option<PathBuf>,

    /// Root directory of the song metadata files.
    #[clap(long, value_parser = parse_path)]
    pub song_data: Option<PathBuf>,

    /// Root directory of the activity log files.
    #[clap(long, value_parser = parse_path)]
    pub log_data: Option<PathBuf>,
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

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let cli_config = CliConfig {
        db_path: cli_args.db_path,
        song_data_path: cli_args.song_data,
        log_data_path: cli_args.log_data,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Opening warehouse database at {:?}...", config.db_path);
    let mut warehouse = SqliteWarehouse::open(&config.db_path)?;

    let song_stats = process_data(&mut warehouse, &config.song_data_path, process_song_file)?;
    song_stats.log_summary("Song data");

    let log_stats = process_data(&mut warehouse, &config.log_data_path, process_log_file)?;
    log_stats.log_summary("Log data");

    let counts = warehouse.counts()?;
    info!(
        "Warehouse now holds {} songplays, {} users, {} songs, {} artists, {} time rows",
        counts.songplays, counts.users, counts.songs, counts.artists, counts.time
    );
    Ok(())
}
