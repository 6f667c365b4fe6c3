mod handlers;
mod stats;
mod walker;

pub use handlers::{process_log_file, process_song_file};
pub use stats::RunStats;
pub use walker::{discover_json_files, process_data};
