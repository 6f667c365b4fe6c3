use super::models::{ArtistRow, SongMatch, SongPlayRow, SongRow, TimeRow, UserRow};
use super::StoreError;

/// Write side of the warehouse, with the per-table conflict policies, plus
/// the song lookup the log path needs while loading.
pub trait Loader {
    /// Plain insert. A song id that is already stored is a constraint violation.
    fn insert_song(&self, song: &SongRow) -> Result<(), StoreError>;

    /// Inserts the artist. When the artist id is already stored, the incoming
    /// name is prepended to the stored name, comma separated.
    fn upsert_artist(&self, artist: &ArtistRow) -> Result<(), StoreError>;

    /// Inserts the user. An already stored user id keeps its first row untouched.
    fn upsert_user(&self, user: &UserRow) -> Result<(), StoreError>;

    /// Inserts the time row. An already stored start time is left untouched.
    fn upsert_time(&self, time: &TimeRow) -> Result<(), StoreError>;

    /// Inserts a new fact row and returns its `songplay_id`.
    fn insert_songplay(&self, songplay: &SongPlayRow) -> Result<i64, StoreError>;

    /// Finds a song by exact title, artist name and duration.
    /// Returns None when nothing matches.
    fn find_song(
        &self,
        title: &str,
        artist_name: &str,
        duration: Option<f64>,
    ) -> Result<Option<SongMatch>, StoreError>;
}
