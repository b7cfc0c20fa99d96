pub mod api; // HTTP shell
pub mod config;
pub mod core_state;
pub mod db;
pub mod listing; // Filtered listings + choice lists
pub mod models;
pub mod records; // Validated, transactional writes
pub mod stats; // Dashboard aggregations
pub mod status;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::core_state::ClinicState;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Store initialization failed: {0}")]
    Core(#[from] core_state::CoreError),
    #[error(transparent)]
    Server(#[from] api::server::ServerError),
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Initialize the store and serve the API until Ctrl-C.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    tracing::info!(
        "{} starting v{} (db: {})",
        config::APP_NAME,
        config::APP_VERSION,
        config.db_path.display()
    );

    let core = Arc::new(ClinicState::initialize(&config)?);
    api::serve(core, config.bind_addr, api::shutdown_signal()).await?;
    Ok(())
}
