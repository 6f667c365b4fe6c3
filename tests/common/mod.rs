//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.

mod constants;
mod fixtures;

// Public API - this is what tests import
pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::{
    logged_out_event, next_song, page_event, run_full, song_json, TestData,
};

use rusqlite::Connection;

pub fn count_rows(conn: &Connection, table: &str) -> usize {
    let n: i64 = conn
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
        .unwrap();
    n as usize
}
