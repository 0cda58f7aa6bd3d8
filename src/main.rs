//! SeatHub Server: workshop seat registration.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use seathub_api::AppState;
use seathub_core::config::AppConfig;
use seathub_core::error::AppError;
use seathub_database::SeatLedgerDispatch;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load the base file, its `{env}.toml` overlay and `SEATHUB__*` variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("SEATHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("SEATHUB_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = %config.database.backend,
        total_seats = config.workshop.total_seats,
        "Starting SeatHub"
    );

    let ledger = SeatLedgerDispatch::from_config(&config.database).await?;
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = AppState::new(config, Arc::new(ledger.clone()));

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let mut server = tokio::spawn(seathub_api::serve(state, async move {
        let _ = shutdown_rx.changed().await;
    }));

    let result = tokio::select! {
        joined = &mut server => flatten(joined),
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received, draining in-flight requests");
            let _ = shutdown_tx.send(true);

            match tokio::time::timeout(grace, &mut server).await {
                Ok(joined) => flatten(joined),
                Err(_) => {
                    tracing::warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, aborting");
                    server.abort();
                    Ok(())
                }
            }
        }
    };

    ledger.close().await;
    tracing::info!("SeatHub server shut down");
    result
}

fn flatten(
    joined: Result<Result<(), AppError>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    joined.map_err(|e| AppError::internal(format!("Server task failed: {e}")))?
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
