mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_PATH: &str = "sparkify.db";
pub const DEFAULT_SONG_DATA_PATH: &str = "data/song_data";
pub const DEFAULT_LOG_DATA_PATH: &str = "data/log_data";

/// CLI arguments that can be used for config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_path: Option<PathBuf>,
    pub song_data_path: Option<PathBuf>,
    pub log_data_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub song_data_path: PathBuf,
    pub log_data_path: PathBuf,
}

/// TOML value, then CLI value, then the default.
fn pick(file_value: Option<String>, cli_value: &Option<PathBuf>, default: &str) -> PathBuf {
    file_value
        .map(PathBuf::from)
        .or_else(|| cli_value.clone())
        .unwrap_or_else(|| PathBuf::from(default))
}

fn check_data_dir(name: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("{} directory does not exist: {:?}", name, path);
    }
    if !path.is_dir() {
        bail!("{} is not a directory: {:?}", name, path);
    }
    Ok(())
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values, which override the defaults.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_path = pick(file.db_path, &cli.db_path, DEFAULT_DB_PATH);
        let song_data_path = pick(file.song_data_path, &cli.song_data_path, DEFAULT_SONG_DATA_PATH);
        let log_data_path = pick(file.log_data_path, &cli.log_data_path, DEFAULT_LOG_DATA_PATH);

        check_data_dir("song_data", &song_data_path)?;
        check_data_dir("log_data", &log_data_path)?;

        Ok(Self {
            db_path,
            song_data_path,
            log_data_path,
        })
    }

    /// Resolve only the database path, for tools that do not read data files.
    pub fn resolve_db_path(cli: &CliConfig, file_config: Option<FileConfig>) -> PathBuf {
        let file = file_config.unwrap_or_default();
        pick(file.db_path, &cli.db_path, DEFAULT_DB_PATH)
    }
}
