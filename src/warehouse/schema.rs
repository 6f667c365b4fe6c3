//! SQLite schema definitions for the Sparkify star schema.
//!
//! One fact table (song plays) and four dimension tables. Song and artist ids
//! on the fact table are plain text columns: unresolved plays keep a sentinel
//! value instead of referencing a dimension row.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Schema, Table};

pub const SONGPLAY_TABLE_NAME: &str = "songplay_table";
pub const USERS_TABLE_NAME: &str = "users_table";
pub const SONG_TABLE_NAME: &str = "song_table";
pub const ARTISTS_TABLE_NAME: &str = "artists_table";
pub const TIME_TABLE_NAME: &str = "time_table";

/// Song plays fact table, one row per NextSong event
const SONGPLAY_TABLE: Table = Table {
    name: SONGPLAY_TABLE_NAME,
    columns: &[
        sqlite_column!("songplay_id", &SqlType::Integer, is_primary_key = true), // rowid alias
        sqlite_column!("start_time", &SqlType::Text, non_null = true),
        sqlite_column!("user_id", &SqlType::Text, non_null = true),
        sqlite_column!("level", &SqlType::Text),
        sqlite_column!("song_id", &SqlType::Text, non_null = true),
        sqlite_column!("artist_id", &SqlType::Text, non_null = true),
        sqlite_column!("session_id", &SqlType::Integer, non_null = true),
        sqlite_column!("location", &SqlType::Text),
        sqlite_column!("user_agent", &SqlType::Text),
    ],
    indices: &[
        ("idx_songplay_start_time", "start_time"),
        ("idx_songplay_user_id", "user_id"),
    ],
};

const USERS_TABLE: Table = Table {
    name: USERS_TABLE_NAME,
    columns: &[
        sqlite_column!("user_id", &SqlType::Text, is_primary_key = true, non_null = true),
        sqlite_column!("first_name", &SqlType::Text, non_null = true),
        sqlite_column!("last_name", &SqlType::Text, non_null = true),
        sqlite_column!("gender", &SqlType::Text, non_null = true),
        sqlite_column!("level", &SqlType::Text, non_null = true),
    ],
    indices: &[],
};

const SONG_TABLE: Table = Table {
    name: SONG_TABLE_NAME,
    columns: &[
        sqlite_column!("song_id", &SqlType::Text, is_primary_key = true, non_null = true),
        sqlite_column!("title", &SqlType::Text),
        sqlite_column!("artist_id", &SqlType::Text),
        sqlite_column!("year", &SqlType::Integer),
        sqlite_column!("duration", &SqlType::Real),
    ],
    indices: &[("idx_song_title", "title")],
};

const ARTISTS_TABLE: Table = Table {
    name: ARTISTS_TABLE_NAME,
    columns: &[
        sqlite_column!("artist_id", &SqlType::Text, is_primary_key = true, non_null = true),
        sqlite_column!("name", &SqlType::Text),
        sqlite_column!("location", &SqlType::Text),
        sqlite_column!("latitude", &SqlType::Real),
        sqlite_column!("longitude", &SqlType::Real),
    ],
    indices: &[("idx_artists_name", "name")],
};

const TIME_TABLE: Table = Table {
    name: TIME_TABLE_NAME,
    columns: &[
        sqlite_column!("start_time", &SqlType::Text, is_primary_key = true, non_null = true), // 'YYYY-MM-DD HH:MM:SS'
        sqlite_column!("hour", &SqlType::Integer),
        sqlite_column!("day", &SqlType::Integer),
        sqlite_column!("week", &SqlType::Integer),
        sqlite_column!("month", &SqlType::Integer),
        sqlite_column!("year", &SqlType::Integer),
        sqlite_column!("weekday", &SqlType::Integer),
    ],
    indices: &[],
};

/// The schema every database is created with and validated against.
pub const WAREHOUSE_SCHEMA: Schema = Schema {
    tables: &[
        SONGPLAY_TABLE,
        USERS_TABLE,
        SONG_TABLE,
        ARTISTS_TABLE,
        TIME_TABLE,
    ],
};
