//! LoanSewa UI Host
//!
//! Run with: cargo run --bin loansewa
//!
//! Serves the compiled web UI from `server.static_dir` and forwards `/api/*`
//! to the LoanSewa API. Settings come from the first config file found (see
//! [`Config::locate`]) with `LOANSEWA_*` environment overrides; `RUST_LOG`
//! overrides the configured log level.

use loansewa::config::Config;
use loansewa::host::{serve, AppState};
use loansewa::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A broken config file is fatal here; the subscriber depends on it
    let config_path = Config::locate();
    let config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting LoanSewa UI host v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Config file: {:?}", path),
        None => tracing::info!("No config file found, using defaults and environment"),
    }
    tracing::info!("Backend: {}", config.backend.url);
    tracing::info!("Request timeout: {}s", config.backend.request_timeout_secs);

    let state = AppState::new(config)?;
    serve(state).await?;

    Ok(())
}
