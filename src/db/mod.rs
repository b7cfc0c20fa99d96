pub mod repository;
pub mod sqlite;

pub use repository::*;
pub use sqlite::*;

use rusqlite::ffi;
use rusqlite::ErrorCode;
use thiserror::Error;

use crate::models::EntityKind;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(rusqlite::Error),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: EntityKind, id: i64 },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}

/// Constraint failures are split out so callers can tell a dangling
/// reference apart from any other store failure.
impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg) if e.code == ErrorCode::ConstraintViolation => {
                let detail = msg.clone().unwrap_or_else(|| err.to_string());
                if e.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY {
                    DatabaseError::ForeignKeyViolation(detail)
                } else {
                    DatabaseError::ConstraintViolation(detail)
                }
            }
            _ => DatabaseError::Sqlite(err),
        }
    }
}
