//! Test fixture creation for data directories and the warehouse database

use super::constants::*;
use anyhow::Result;
use rusqlite::{Connection, OpenFlags};
use serde_json::{json, Value};
use sparkify_etl::{process_data, process_log_file, process_song_file, RunStats, SqliteWarehouse};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace with empty song and log data roots.
pub struct TestData {
    pub dir: TempDir,
    pub song_data: PathBuf,
    pub log_data: PathBuf,
    pub db_path: PathBuf,
}

impl TestData {
    pub fn empty() -> Result<Self> {
        let dir = TempDir::new()?;
        let song_data = dir.path().join("song_data");
        let log_data = dir.path().join("log_data");
        fs::create_dir_all(&song_data)?;
        fs::create_dir_all(&log_data)?;
        let db_path = dir.path().join("sparkify.db");
        Ok(Self {
            dir,
            song_data,
            log_data,
            db_path,
        })
    }

    /// Two song files in nested directories and two log files, see
    /// `constants.rs` for what they contain.
    pub fn standard() -> Result<Self> {
        let data = Self::empty()?;
        data.write_song_file(
            "A/A/A/TRAAAAW128F429D538.json",
            &song_json(SONG_1_ID, SONG_1_TITLE, SONG_1_DURATION, ARTIST_1_ID, ARTIST_1_NAME),
        )?;

        let mut box_tops = song_json(
            SONG_2_ID,
            SONG_2_TITLE,
            SONG_2_DURATION,
            ARTIST_2_ID,
            ARTIST_2_NAME,
        );
        box_tops["artist_latitude"] = json!(ARTIST_2_LATITUDE);
        box_tops["artist_longitude"] = json!(ARTIST_2_LONGITUDE);
        box_tops["artist_location"] = json!("Memphis, TN");
        box_tops["year"] = json!(1969);
        data.write_song_file("A/A/B/TRAABJL12903CDCF1A.json", &box_tops)?;

        data.write_log_file(
            "2018/11/2018-11-12-events.json",
            &[
                next_song(
                    USER_SYLVIE_ID,
                    "free",
                    ARTIST_1_NAME,
                    SONG_1_TITLE,
                    SONG_1_DURATION,
                    TS_EARLY,
                ),
                page_event(USER_RYAN_ID, "Ryan", "Smith", "M", "Home", TS_HOME),
                next_song(
                    USER_SYLVIE_ID,
                    "free",
                    "Nobody Known",
                    "Unknown Song",
                    100.0,
                    TS_AFTERNOON,
                ),
                logged_out_event(TS_LOGGED_OUT),
            ],
        )?;
        data.write_log_file(
            "2018/11/2018-11-13-events.json",
            &[next_song(
                USER_SYLVIE_ID,
                "paid",
                ARTIST_2_NAME,
                SONG_2_TITLE,
                SONG_2_DURATION,
                TS_EARLY,
            )],
        )?;
        Ok(data)
    }

    pub fn write_song_file(&self, relative: &str, song: &Value) -> Result<PathBuf> {
        write_file(&self.song_data, relative, &song.to_string())
    }

    pub fn write_log_file(&self, relative: &str, events: &[Value]) -> Result<PathBuf> {
        let lines: Vec<String> = events.iter().map(Value::to_string).collect();
        write_file(&self.log_data, relative, &lines.join("\n"))
    }

    pub fn write_raw_log_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        write_file(&self.log_data, relative, content)
    }

    pub fn open_warehouse(&self) -> Result<SqliteWarehouse> {
        Ok(SqliteWarehouse::open(&self.db_path)?)
    }

    /// A separate read connection on the warehouse file, for assertions.
    pub fn query_connection(&self) -> Result<Connection> {
        Ok(Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY,
        )?)
    }
}

fn write_file(root: &Path, relative: &str, content: &str) -> Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

pub fn song_json(
    song_id: &str,
    title: &str,
    duration: f64,
    artist_id: &str,
    artist_name: &str,
) -> Value {
    json!({
        "num_songs": 1,
        "artist_id": artist_id,
        "artist_latitude": null,
        "artist_longitude": null,
        "artist_location": "",
        "artist_name": artist_name,
        "song_id": song_id,
        "title": title,
        "duration": duration,
        "year": 0
    })
}

pub fn next_song(
    user_id: &str,
    level: &str,
    artist: &str,
    song: &str,
    length: f64,
    ts: i64,
) -> Value {
    json!({
        "artist": artist,
        "auth": "Logged In",
        "firstName": "Sylvie",
        "gender": "F",
        "itemInSession": 0,
        "lastName": "Cruz",
        "length": length,
        "level": level,
        "location": "Washington-Arlington-Alexandria, DC-VA-MD-WV",
        "method": "PUT",
        "page": "NextSong",
        "registration": 1540266185796.0,
        "sessionId": 484,
        "song": song,
        "status": 200,
        "ts": ts,
        "userAgent": "\"Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_4)\"",
        "userId": user_id
    })
}

pub fn page_event(
    user_id: &str,
    first_name: &str,
    last_name: &str,
    gender: &str,
    page: &str,
    ts: i64,
) -> Value {
    json!({
        "artist": null,
        "auth": "Logged In",
        "firstName": first_name,
        "gender": gender,
        "itemInSession": 1,
        "lastName": last_name,
        "length": null,
        "level": "free",
        "location": "San Jose-Sunnyvale-Santa Clara, CA",
        "method": "GET",
        "page": page,
        "registration": 1541016707796.0,
        "sessionId": 583,
        "song": null,
        "status": 200,
        "ts": ts,
        "userAgent": "Mozilla/5.0 (X11; Linux x86_64)",
        "userId": user_id
    })
}

pub fn logged_out_event(ts: i64) -> Value {
    json!({
        "artist": null,
        "auth": "Logged Out",
        "firstName": null,
        "gender": null,
        "itemInSession": 0,
        "lastName": null,
        "length": null,
        "level": "free",
        "location": null,
        "method": "PUT",
        "page": "Login",
        "registration": null,
        "sessionId": 52,
        "song": null,
        "status": 307,
        "ts": ts,
        "userAgent": null,
        "userId": ""
    })
}

/// Song data first, then log data, as the ETL binary does.
pub fn run_full(data: &TestData, warehouse: &mut SqliteWarehouse) -> Result<(RunStats, RunStats)> {
    let songs = process_data(warehouse, &data.song_data, process_song_file)?;
    let logs = process_data(warehouse, &data.log_data, process_log_file)?;
    Ok((songs, logs))
}
