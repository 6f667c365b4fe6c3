//! Sparkify ETL Library
//!
//! Loads song-metadata and user-activity JSON files into the Sparkify
//! star schema (songs, artists, users, time, song plays).

pub mod config;
pub mod pipeline;
pub mod records;
pub mod sqlite_persistence;
pub mod transform;
pub mod warehouse;

pub use pipeline::{process_data, process_log_file, process_song_file, RunStats};
pub use warehouse::{Loader, SqliteWarehouse, StoreError};
