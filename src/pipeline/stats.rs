use tracing::info;

/// Rows handled by one file or a whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files: usize,
    pub songs: usize,
    pub artists: usize,
    pub users: usize,
    pub time_rows: usize,
    pub songplays: usize,
    pub lookup_misses: usize,
}

impl RunStats {
    pub fn merge(&mut self, other: &RunStats) {
        self.files += other.files;
        self.songs += other.songs;
        self.artists += other.artists;
        self.users += other.users;
        self.time_rows += other.time_rows;
        self.songplays += other.songplays;
        self.lookup_misses += other.lookup_misses;
    }

    pub fn log_summary(&self, label: &str) {
        info!("{} summary", label);
        info!("  Files processed: {}", self.files);
        if self.songs > 0 || self.artists > 0 {
            info!("  Song rows inserted: {}", self.songs);
            info!("  Artist rows upserted: {}", self.artists);
        }
        if self.time_rows > 0 || self.users > 0 || self.songplays > 0 {
            info!("  Time rows upserted: {}", self.time_rows);
            info!("  User rows upserted: {}", self.users);
            info!(
                "  Songplay rows inserted: {} ({} without a matching song)",
                self.songplays, self.lookup_misses
            );
        }
    }
}
