use crate::records::SongMetadataRecord;
use crate::warehouse::{ArtistRow, SongRow};

pub fn song_row(record: &SongMetadataRecord) -> SongRow {
    SongRow {
        song_id: record.song_id.clone(),
        title: record.title.clone(),
        artist_id: record.artist_id.clone(),
        year: record.year,
        duration: record.duration,
    }
}

pub fn artist_row(record: &SongMetadataRecord) -> ArtistRow {
    ArtistRow {
        artist_id: record.artist_id.clone(),
        name: record.artist_name.clone(),
        location: record.artist_location.clone(),
        latitude: record.artist_latitude,
        longitude: record.artist_longitude,
    }
}

/// Maps one song-metadata record to its song and artist rows.
pub fn transform_song_record(record: &SongMetadataRecord) -> (SongRow, ArtistRow) {
    (song_row(record), artist_row(record))
}
