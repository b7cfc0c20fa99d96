//! Process-wide application state.
//!
//! `ClinicState` is built once at start-up from `AppConfig` and shared by
//! `Arc` with the HTTP shell. It holds no connection itself: each logical
//! request opens its own, so concurrent requests never share a transaction.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::config::AppConfig;
use crate::db;

pub struct ClinicState {
    db_path: PathBuf,
}

impl ClinicState {
    /// Prepare the store: create its directory, then run pending migrations.
    pub fn initialize(config: &AppConfig) -> Result<Self, CoreError> {
        Self::open(&config.db_path)
    }

    pub fn open(db_path: &Path) -> Result<Self, CoreError> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CoreError::StoreDir {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        // Migrations run on this throwaway connection; request connections skip them.
        let conn = db::open_database(db_path)?;
        drop(conn);

        tracing::info!(path = %db_path.display(), "Clinic store ready");
        Ok(Self {
            db_path: db_path.to_path_buf(),
        })
    }

    /// Open a fresh connection for one logical request.
    pub fn open_db(&self) -> Result<rusqlite::Connection, CoreError> {
        db::connect(&self.db_path).map_err(CoreError::Database)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// The calendar day used for status derivation, in local time.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Errors from ClinicState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(#[from] db::DatabaseError),
    #[error("Cannot create store directory {path:?}: {reason}")]
    StoreDir { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("clinic.db");
        let state = ClinicState::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(state.db_path(), path.as_path());
    }

    #[test]
    fn each_request_gets_its_own_migrated_connection() {
        let dir = tempfile::tempdir().unwrap();
        let state = ClinicState::open(&dir.path().join("clinic.db")).unwrap();

        let a = state.open_db().unwrap();
        let b = state.open_db().unwrap();
        a.execute(
            "INSERT INTO doctors (name, specialization) VALUES ('House', 'Diagnostics')",
            [],
        )
        .unwrap();
        let seen: i64 = b
            .query_row("SELECT COUNT(*) FROM doctors", [], |row| row.get(0))
            .unwrap();
        assert_eq!(seen, 1);

        let fk: i64 = b.query_row("PRAGMA foreign_keys", [], |row| row.get(0)).unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn reopening_existing_store_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinic.db");
        ClinicState::open(&path).unwrap();
        let state = ClinicState::open(&path).unwrap();
        let version: i64 = state
            .open_db()
            .unwrap()
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, 1);
    }
}
