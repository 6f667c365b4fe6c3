//! Per-file pipelines: read, transform, load.

use super::RunStats;
use crate::records::{read_log_records, read_song_record};
use crate::transform::{songplay_rows, time_rows, transform_song_record, user_rows};
use crate::warehouse::Loader;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Loads one song-metadata file: one song row and one artist row.
pub fn process_song_file(loader: &dyn Loader, path: &Path) -> Result<RunStats> {
    let record = read_song_record(path)?;
    let (song, artist) = transform_song_record(&record);

    loader.insert_song(&song)?;
    loader.upsert_artist(&artist)?;

    debug!("Loaded song {} by artist {}", song.song_id, artist.artist_id);
    Ok(RunStats {
        files: 1,
        songs: 1,
        artists: 1,
        ..Default::default()
    })
}

/// Loads one log file: time rows and song plays from its NextSong events,
/// user rows from all of its events.
pub fn process_log_file(loader: &dyn Loader, path: &Path) -> Result<RunStats> {
    let records = read_log_records(path)?;
    let mut stats = RunStats {
        files: 1,
        ..Default::default()
    };

    for time in time_rows(&records)? {
        loader.upsert_time(&time)?;
        stats.time_rows += 1;
    }

    for user in user_rows(&records) {
        loader.upsert_user(&user)?;
        stats.users += 1;
    }

    for songplay in songplay_rows(&records, loader)? {
        if songplay.song_id.is_none() {
            stats.lookup_misses += 1;
        }
        loader.insert_songplay(&songplay)?;
        stats.songplays += 1;
    }

    debug!(
        "Loaded {} events from {:?}: {} time rows, {} users, {} songplays",
        records.len(),
        path,
        stats.time_rows,
        stats.users,
        stats.songplays
    );
    Ok(stats)
}
