use serde::{Deserialize, Deserializer};

/// Page value of log events that record a song being played.
pub const NEXT_SONG_PAGE: &str = "NextSong";

/// One song-metadata file: a single object describing a song and its artist.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SongMetadataRecord {
    pub num_songs: Option<i64>,
    pub artist_id: String,
    pub artist_latitude: Option<f64>,
    pub artist_longitude: Option<f64>,
    pub artist_location: Option<String>,
    pub artist_name: String,
    pub song_id: String,
    pub title: String,
    pub duration: f64,
    pub year: i32,
}

/// One line of a user-activity log file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogEventRecord {
    pub artist: Option<String>,
    pub auth: Option<String>,
    pub first_name: Option<String>,
    pub gender: Option<String>,
    pub item_in_session: Option<i64>,
    pub last_name: Option<String>,
    pub length: Option<f64>,
    pub level: Option<String>,
    pub location: Option<String>,
    pub method: Option<String>,
    pub page: String,
    pub registration: Option<f64>,
    pub session_id: i64,
    pub song: Option<String>,
    pub status: Option<i64>,
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
    pub user_agent: Option<String>,
    /// Logged-out events carry an empty string.
    #[serde(default, deserialize_with = "deserialize_user_id")]
    pub user_id: Option<String>,
}

impl LogEventRecord {
    pub fn is_next_song(&self) -> bool {
        self.page == NEXT_SONG_PAGE
    }
}

// Producers are not consistent about quoting user ids.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Text(String),
    Number(i64),
}

fn deserialize_user_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<RawUserId>::deserialize(deserializer)?.map(|raw| match raw {
            RawUserId::Text(s) => s,
            RawUserId::Number(n) => n.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG_LINE: &str = r#"{"artist":"Pavement","auth":"Logged In","firstName":"Sylvie","gender":"F","itemInSession":0,"lastName":"Cruz","length":99.16036,"level":"free","location":"Washington-Arlington-Alexandria, DC-VA-MD-WV","method":"PUT","page":"NextSong","registration":1540266185796.0,"sessionId":345,"song":"Mercy:The Laundromat","status":200,"ts":1541990258796,"userAgent":"\"Mozilla\/5.0\"","userId":"10"}"#;

    #[test]
    fn parses_log_event() {
        let event: LogEventRecord = serde_json::from_str(LOG_LINE).unwrap();
        assert_eq!(event.first_name.as_deref(), Some("Sylvie"));
        assert_eq!(event.length, Some(99.16036));
        assert_eq!(event.session_id, 345);
        assert_eq!(event.ts, 1541990258796);
        assert_eq!(event.user_id.as_deref(), Some("10"));
        assert_eq!(event.user_agent.as_deref(), Some("\"Mozilla/5.0\""));
        assert!(event.is_next_song());
    }

    #[test]
    fn accepts_numeric_and_missing_user_id() {
        let numeric: LogEventRecord =
            serde_json::from_str(r#"{"page":"Home","sessionId":1,"ts":0,"userId":42}"#).unwrap();
        assert_eq!(numeric.user_id.as_deref(), Some("42"));
        assert!(!numeric.is_next_song());

        let missing: LogEventRecord =
            serde_json::from_str(r#"{"page":"Home","sessionId":1,"ts":0}"#).unwrap();
        assert_eq!(missing.user_id, None);

        let null: LogEventRecord =
            serde_json::from_str(r#"{"page":"Home","sessionId":1,"ts":0,"userId":null}"#)
                .unwrap();
        assert_eq!(null.user_id, None);
    }

    #[test]
    fn parses_song_metadata_with_null_coordinates() {
        let record: SongMetadataRecord = serde_json::from_str(
            r#"{"num_songs": 1, "artist_id": "ARD7TVE1187B99BFB1", "artist_latitude": null, "artist_longitude": null, "artist_location": "California - LA", "artist_name": "Casual", "song_id": "SOMZWCG12A8C13C480", "title": "I Didn't Mean To", "duration": 218.93179, "year": 0}"#,
        )
        .unwrap();
        assert_eq!(record.artist_latitude, None);
        assert_eq!(record.artist_location.as_deref(), Some("California - LA"));
        assert_eq!(record.year, 0);
        assert_eq!(record.duration, 218.93179);
    }
}
