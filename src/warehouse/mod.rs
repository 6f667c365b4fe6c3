mod error;
pub mod models;
mod schema;
mod store;
mod trait_def;

pub use error::StoreError;
pub use models::{
    ArtistRow, SongMatch, SongPlayRow, SongRow, TableCounts, TimeRow, UserRow, UNRESOLVED_KEY,
};
pub use schema::{
    ARTISTS_TABLE_NAME, SONGPLAY_TABLE_NAME, SONG_TABLE_NAME, TIME_TABLE_NAME,
    USERS_TABLE_NAME, WAREHOUSE_SCHEMA,
};
pub use store::{SqliteLoader, SqliteWarehouse};
pub use trait_def::Loader;
