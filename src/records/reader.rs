use super::{LogEventRecord, SongMetadataRecord};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {path:?} at line {line}: {reason}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

fn read_text(path: &Path) -> Result<String, RecordError> {
    std::fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn malformed(path: &Path, line: usize, reason: impl ToString) -> RecordError {
    RecordError::MalformedRecord {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}

/// Reads a song-metadata file, which must hold exactly one JSON object.
pub fn read_song_record(path: &Path) -> Result<SongMetadataRecord, RecordError> {
    let text = read_text(path)?;
    let mut stream = serde_json::Deserializer::from_str(&text).into_iter::<SongMetadataRecord>();

    let record = match stream.next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => return Err(malformed(path, e.line(), e)),
        None => return Err(malformed(path, 1, "file contains no record")),
    };

    match stream.next() {
        None => Ok(record),
        Some(Ok(_)) => Err(malformed(path, 2, "file contains more than one record")),
        Some(Err(e)) => Err(malformed(path, e.line(), e)),
    }
}

/// Reads a JSON-lines log file. Blank lines are skipped, order is preserved.
pub fn read_log_records(path: &Path) -> Result<Vec<LogEventRecord>, RecordError> {
    let text = read_text(path)?;
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: LogEventRecord =
            serde_json::from_str(line).map_err(|e| malformed(path, index + 1, e))?;
        records.push(record);
    }
    Ok(records)
}
