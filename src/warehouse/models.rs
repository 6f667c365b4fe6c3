//! Row types for the warehouse tables.

/// Persisted in place of a song or artist id when a play could not be matched.
pub const UNRESOLVED_KEY: &str = "None";

#[derive(Clone, Debug, PartialEq)]
pub struct SongRow {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i32,
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArtistRow {
    pub artist_id: String,
    pub name: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub level: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeRow {
    /// Second precision, `YYYY-MM-DD HH:MM:SS` in UTC.
    pub start_time: String,
    pub hour: u32,
    pub day: u32,
    /// ISO 8601 week number.
    pub week: u32,
    pub month: u32,
    pub year: i32,
    /// Monday is 0.
    pub weekday: u32,
}

/// Ids of a catalogued song and its artist, as found by a play lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongMatch {
    pub song_id: String,
    pub artist_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongPlayRow {
    pub start_time: String,
    pub user_id: String,
    pub level: Option<String>,
    pub song_id: Option<String>,
    pub artist_id: Option<String>,
    pub session_id: i64,
    pub location: Option<String>,
    pub user_agent: Option<String>,
}

impl SongPlayRow {
    /// The song id as written to the fact table.
    pub fn persisted_song_id(&self) -> &str {
        self.song_id.as_deref().unwrap_or(UNRESOLVED_KEY)
    }

    /// The artist id as written to the fact table.
    pub fn persisted_artist_id(&self) -> &str {
        self.artist_id.as_deref().unwrap_or(UNRESOLVED_KEY)
    }
}

/// Row counts of the five tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub songplays: usize,
    pub users: usize,
    pub songs: usize,
    pub artists: usize,
    pub time: usize,
}
