mod models;
mod reader;

pub use models::{LogEventRecord, SongMetadataRecord, NEXT_SONG_PAGE};
pub use reader::{read_log_records, read_song_record, RecordError};
