//! SQLite-backed warehouse.
//!
//! `SqliteWarehouse` owns the single connection used for a whole run and hands
//! out a `Loader` bound to one transaction at a time.

use super::models::{ArtistRow, SongMatch, SongPlayRow, SongRow, TableCounts, TimeRow, UserRow};
use super::schema::{
    ARTISTS_TABLE_NAME, SONGPLAY_TABLE_NAME, SONG_TABLE_NAME, TIME_TABLE_NAME,
    USERS_TABLE_NAME, WAREHOUSE_SCHEMA,
};
use super::{Loader, StoreError};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct SqliteWarehouse {
    conn: Connection,
    db_path: PathBuf,
}

fn open_connection(db_path: &Path) -> Result<Connection> {
    Connection::open_with_flags(
        db_path,
        rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
            | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
            | rusqlite::OpenFlags::SQLITE_OPEN_URI
            | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("Failed to open warehouse database {:?}", db_path))
}

fn create_or_validate(conn: &Connection) -> Result<()> {
    let schema = &WAREHOUSE_SCHEMA;
    if schema.is_blank(conn)? {
        info!("Creating warehouse schema");
        schema.create(conn)?;
    } else {
        schema
            .validate(conn)
            .context("Warehouse schema validation failed")?;
    }
    Ok(())
}

impl SqliteWarehouse {
    /// Opens the database at `db_path`, creating the tables if none exist and
    /// validating them otherwise.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref();
        let conn = open_connection(db_path)
            .and_then(|conn| {
                create_or_validate(&conn)?;
                Ok(conn)
            })
            .map_err(|e| StoreError::connection(db_path, &e))?;

        let warehouse = SqliteWarehouse {
            conn,
            db_path: db_path.to_path_buf(),
        };
        let counts = warehouse.counts()?;
        info!(
            "Opened warehouse {:?}: {} songs, {} artists, {} users, {} time rows, {} songplays",
            db_path, counts.songs, counts.artists, counts.users, counts.time, counts.songplays
        );
        Ok(warehouse)
    }

    /// Opens the database at `db_path`, dropping the five tables and creating
    /// them again empty.
    pub fn recreate<P: AsRef<Path>>(db_path: P) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref();
        let conn = open_connection(db_path)
            .and_then(|conn| {
                let schema = &WAREHOUSE_SCHEMA;
                info!("Dropping warehouse tables in {:?}", db_path);
                schema.drop(&conn)?;
                info!("Creating warehouse tables in {:?}", db_path);
                schema.create(&conn)?;
                Ok(conn)
            })
            .map_err(|e| StoreError::connection(db_path, &e))?;

        Ok(SqliteWarehouse {
            conn,
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` inside one transaction. The transaction is committed only when
    /// `f` succeeds; on error it is rolled back and the error returned.
    pub fn in_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&dyn Loader) -> Result<T>,
    {
        let tx = self.conn.transaction()?;
        let value = f(&SqliteLoader::new(&tx))?;
        tx.commit().context("Failed to commit transaction")?;
        Ok(value)
    }

    /// A loader running in autocommit mode.
    #[cfg(test)]
    fn loader(&self) -> SqliteLoader<'_> {
        SqliteLoader::new(&self.conn)
    }

    #[cfg(test)]
    fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn counts(&self) -> Result<TableCounts, StoreError> {
        let count = |table: &str| -> Result<usize, StoreError> {
            let n: i64 =
                self.conn
                    .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))?;
            Ok(n as usize)
        };
        Ok(TableCounts {
            songplays: count(SONGPLAY_TABLE_NAME)?,
            users: count(USERS_TABLE_NAME)?,
            songs: count(SONG_TABLE_NAME)?,
            artists: count(ARTISTS_TABLE_NAME)?,
            time: count(TIME_TABLE_NAME)?,
        })
    }
}

/// `Loader` over a borrowed connection or transaction.
pub struct SqliteLoader<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteLoader<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        SqliteLoader { conn }
    }
}

impl Loader for SqliteLoader<'_> {
    fn insert_song(&self, song: &SongRow) -> Result<(), StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO song_table (song_id, title, artist_id, year, duration)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        stmt.execute(params![
            song.song_id,
            song.title,
            song.artist_id,
            song.year,
            song.duration
        ])
        .map_err(|e| StoreError::on_write(SONG_TABLE_NAME, e))?;
        Ok(())
    }

    fn upsert_artist(&self, artist: &ArtistRow) -> Result<(), StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO artists_table (artist_id, name, location, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(artist_id) DO UPDATE SET name = excluded.name || ',' || artists_table.name",
        )?;
        stmt.execute(params![
            artist.artist_id,
            artist.name,
            artist.location,
            artist.latitude,
            artist.longitude
        ])
        .map_err(|e| StoreError::on_write(ARTISTS_TABLE_NAME, e))?;
        Ok(())
    }

    fn upsert_user(&self, user: &UserRow) -> Result<(), StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO users_table (user_id, first_name, last_name, gender, level)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(user_id) DO UPDATE SET user_id = users_table.user_id",
        )?;
        stmt.execute(params![
            user.user_id,
            user.first_name,
            user.last_name,
            user.gender,
            user.level
        ])
        .map_err(|e| StoreError::on_write(USERS_TABLE_NAME, e))?;
        Ok(())
    }

    fn upsert_time(&self, time: &TimeRow) -> Result<(), StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO time_table (start_time, hour, day, week, month, year, weekday)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(start_time) DO UPDATE SET start_time = time_table.start_time",
        )?;
        stmt.execute(params![
            time.start_time,
            time.hour,
            time.day,
            time.week,
            time.month,
            time.year,
            time.weekday
        ])
        .map_err(|e| StoreError::on_write(TIME_TABLE_NAME, e))?;
        Ok(())
    }

    fn insert_songplay(&self, songplay: &SongPlayRow) -> Result<i64, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO songplay_table
                (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        stmt.execute(params![
            songplay.start_time,
            songplay.user_id,
            songplay.level,
            songplay.persisted_song_id(),
            songplay.persisted_artist_id(),
            songplay.session_id,
            songplay.location,
            songplay.user_agent
        ])
        .map_err(|e| StoreError::on_write(SONGPLAY_TABLE_NAME, e))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn find_song(
        &self,
        title: &str,
        artist_name: &str,
        duration: Option<f64>,
    ) -> Result<Option<SongMatch>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT s.song_id, a.artist_id
             FROM song_table AS s
             JOIN artists_table AS a ON a.artist_id = s.artist_id
             WHERE s.title = ?1 AND a.name = ?2 AND s.duration = ?3
             LIMIT 1",
        )?;
        let found = stmt
            .query_row(params![title, artist_name, duration], |row| {
                Ok(SongMatch {
                    song_id: row.get(0)?,
                    artist_id: row.get(1)?,
                })
            })
            .optional()?;
        if found.is_none() {
            debug!(
                "No song matches title {:?}, artist {:?}, duration {:?}",
                title, artist_name, duration
            );
        }
        Ok(found)
    }
}
