use std::process::ExitCode;

use clinic_records_lib::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    clinic_records_lib::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match clinic_records_lib::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
