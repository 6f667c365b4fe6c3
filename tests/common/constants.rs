//! Shared constants for end-to-end tests
//!
//! Ids, names and timestamps of the fixture data written by `fixtures.rs`.

// ============================================================================
// Song data
// ============================================================================

/// Song "I Didn't Mean To" by "Casual", played once in the fixture logs
pub const SONG_1_ID: &str = "SOMZWCG12A8C13C480";
pub const SONG_1_TITLE: &str = "I Didn't Mean To";
pub const SONG_1_DURATION: f64 = 218.93179;
pub const ARTIST_1_ID: &str = "ARD7TVE1187B99BFB1";
pub const ARTIST_1_NAME: &str = "Casual";

/// Song "Something Girls" by "The Box Tops", the artist with coordinates
pub const SONG_2_ID: &str = "SONHOTT12A8C13493C";
pub const SONG_2_TITLE: &str = "Something Girls";
pub const SONG_2_DURATION: f64 = 233.40363;
pub const ARTIST_2_ID: &str = "ARMJAGH1187FB546F3";
pub const ARTIST_2_NAME: &str = "The Box Tops";
pub const ARTIST_2_LATITUDE: f64 = 35.14968;
pub const ARTIST_2_LONGITUDE: f64 = -90.04892;

// ============================================================================
// Log data
// ============================================================================

pub const USER_SYLVIE_ID: &str = "10";
pub const USER_RYAN_ID: &str = "26";

/// 2018-11-12 02:37:44.796 UTC
pub const TS_EARLY: i64 = 1541990264796;
pub const TS_EARLY_START_TIME: &str = "2018-11-12 02:37:44";

/// 2018-11-12 15:00:00 UTC
pub const TS_AFTERNOON: i64 = 1542034800000;
pub const TS_AFTERNOON_START_TIME: &str = "2018-11-12 15:00:00";

/// 2018-11-12 02:38:20 UTC, a Home page event
pub const TS_HOME: i64 = 1541990300000;

/// 2018-11-12 02:40:00 UTC, a logged-out event
pub const TS_LOGGED_OUT: i64 = 1541990400000;

/// Values written by `write_standard_data` and loaded by a full run.
pub const STANDARD_SONG_FILES: usize = 2;
pub const STANDARD_LOG_FILES: usize = 2;
pub const STANDARD_USERS: usize = 2;
pub const STANDARD_TIME_ROWS: usize = 2;
pub const STANDARD_SONGPLAYS: usize = 3;
