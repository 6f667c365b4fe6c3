//! Maps raw input records to warehouse rows.

mod events;
mod song;
mod time;

pub use events::{next_song_events, songplay_row, songplay_rows, time_rows, user_rows};
pub use song::{artist_row, song_row, transform_song_record};
pub use time::{datetime_from_millis, start_time, time_row, START_TIME_FORMAT};

use crate::warehouse::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Timestamp {0} ms is out of range")]
    TimestampOutOfRange(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}
