use rusqlite::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Constraint violation on {table}: {source}")]
    ConstraintViolation {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Cannot use warehouse database {path:?}: {reason}")]
    Connection { path: PathBuf, reason: String },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    /// Wraps a write failure on `table`, singling out constraint violations.
    pub(super) fn on_write(table: &'static str, err: rusqlite::Error) -> Self {
        if err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
            StoreError::ConstraintViolation { table, source: err }
        } else {
            StoreError::Sqlite(err)
        }
    }

    pub(super) fn connection<P: Into<PathBuf>>(path: P, reason: &anyhow::Error) -> Self {
        StoreError::Connection {
            path: path.into(),
            reason: format!("{:#}", reason),
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation { .. })
    }
}
