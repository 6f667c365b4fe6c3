use super::time::{start_time, time_row};
use super::TransformError;
use crate::records::LogEventRecord;
use crate::warehouse::{Loader, SongPlayRow, TimeRow, UserRow};
use std::collections::HashSet;

/// Events that record a song being played.
pub fn next_song_events(records: &[LogEventRecord]) -> impl Iterator<Item = &LogEventRecord> {
    records.iter().filter(|r| r.is_next_song())
}

/// One time row per NextSong event, duplicates included.
pub fn time_rows(records: &[LogEventRecord]) -> Result<Vec<TimeRow>, TransformError> {
    next_song_events(records).map(|r| time_row(r.ts)).collect()
}

/// User rows from every event, whatever the page. Events with an empty or
/// missing user id, or any missing profile field, are dropped; of several
/// rows for the same user id only the first one in file order is kept.
pub fn user_rows(records: &[LogEventRecord]) -> Vec<UserRow> {
    let mut seen = HashSet::new();
    let mut users = Vec::new();
    for record in records {
        let user = match (
            &record.user_id,
            &record.first_name,
            &record.last_name,
            &record.gender,
            &record.level,
        ) {
            (Some(user_id), Some(first_name), Some(last_name), Some(gender), Some(level))
                if !user_id.is_empty() =>
            {
                UserRow {
                    user_id: user_id.clone(),
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                    gender: gender.clone(),
                    level: level.clone(),
                }
            }
            _ => continue,
        };
        if seen.insert(user.user_id.clone()) {
            users.push(user);
        }
    }
    users
}

/// Builds the fact row of a NextSong event. The song and artist ids are
/// looked up by exact title, artist name and duration, and stay None when
/// nothing matches.
pub fn songplay_row(
    record: &LogEventRecord,
    loader: &dyn Loader,
) -> Result<SongPlayRow, TransformError> {
    let found = match (&record.song, &record.artist) {
        (Some(title), Some(artist_name)) => loader.find_song(title, artist_name, record.length)?,
        _ => None,
    };
    let (song_id, artist_id) = match found {
        Some(song_match) => (Some(song_match.song_id), Some(song_match.artist_id)),
        None => (None, None),
    };

    Ok(SongPlayRow {
        start_time: start_time(record.ts)?,
        user_id: record.user_id.clone().unwrap_or_default(),
        level: record.level.clone(),
        song_id,
        artist_id,
        session_id: record.session_id,
        location: record.location.clone(),
        user_agent: record.user_agent.clone(),
    })
}

/// Fact rows for every NextSong event, in file order.
pub fn songplay_rows(
    records: &[LogEventRecord],
    loader: &dyn Loader,
) -> Result<Vec<SongPlayRow>, TransformError> {
    next_song_events(records)
        .map(|r| songplay_row(r, loader))
        .collect()
}
