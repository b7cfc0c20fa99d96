use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "ClinicRecords";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DB_PATH_ENV: &str = "CLINIC_DB_PATH";
pub const BIND_ENV: &str = "CLINIC_BIND";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DB_FILE_NAME: &str = "clinic.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot determine a data directory; set CLINIC_DB_PATH")]
    NoDataDir,
    #[error("Invalid CLINIC_BIND value '{value}': {reason}")]
    InvalidBind { value: String, reason: String },
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "clinic_records_lib=info,tower_http=info,warn"
}

/// Get the application data directory (`<platform data dir>/ClinicRecords`).
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|base| base.join(APP_NAME))
}

/// Default database file under the application data directory.
pub fn default_db_path() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(DB_FILE_NAME))
}

/// Process configuration, built once at start-up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = match value(DB_PATH_ENV) {
            Some(path) => PathBuf::from(path.trim()),
            None => default_db_path().ok_or(ConfigError::NoDataDir)?,
        };

        let bind = value(BIND_ENV).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBind {
                value: bind.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self { db_path, bind_addr })
    }
}
