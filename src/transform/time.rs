use super::TransformError;
use crate::warehouse::TimeRow;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Second precision, UTC.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn datetime_from_millis(ts: i64) -> Result<DateTime<Utc>, TransformError> {
    DateTime::from_timestamp_millis(ts).ok_or(TransformError::TimestampOutOfRange(ts))
}

/// Formats an epoch-milliseconds timestamp as a `start_time` key, dropping
/// the sub-second part.
pub fn start_time(ts: i64) -> Result<String, TransformError> {
    Ok(datetime_from_millis(ts)?
        .format(START_TIME_FORMAT)
        .to_string())
}

/// Calendar breakdown of an epoch-milliseconds timestamp.
pub fn time_row(ts: i64) -> Result<TimeRow, TransformError> {
    let dt = datetime_from_millis(ts)?;
    Ok(TimeRow {
        start_time: dt.format(START_TIME_FORMAT).to_string(),
        hour: dt.hour(),
        day: dt.day(),
        week: dt.iso_week().week(),
        month: dt.month(),
        year: dt.year(),
        weekday: dt.weekday().num_days_from_monday(),
    })
}
