//! Error mapping from the database driver to port errors

use core_kernel::PortError;

/// Maps a SQLx error onto the port taxonomy
///
/// Row-not-found is surfaced by the adapters themselves with entity
/// context; everything else that reaches this function is a transport
/// failure from the caller's point of view.
pub fn map_sqlx(err: sqlx::Error) -> PortError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            PortError::conflict(db.message().to_string())
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            PortError::validation(db.message().to_string())
        }
        other => PortError::unavailable(other.to_string()),
    }
}
