//! Bookstore Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use bookstore_api::AppState;
use bookstore_auth::SigningSecret;
use bookstore_core::config::AppConfig;
use bookstore_core::error::AppError;
use bookstore_database::DatabasePool;
use bookstore_database::repositories::{BookRepository, ReadListRepository, UserRepository};

#[tokio::main]
async fn main() {
    let env = std::env::var("BOOKSTORE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Bookstore v{}", env!("CARGO_PKG_VERSION"));

    // Refuse to start with a short signing secret or unusable token lifetimes.
    let secret = SigningSecret::new(config.auth.token_secret.clone())?;
    config.auth.validate()?;

    let db = DatabasePool::connect_and_migrate(&config.database).await?;

    let users = Arc::new(UserRepository::new(db.pool().clone()));
    let books = Arc::new(BookRepository::new(db.pool().clone()));
    let read_lists = Arc::new(ReadListRepository::new(db.pool().clone()));
    let state = AppState::new(config, &secret, users, books, read_lists);

    let result = bookstore_api::app::serve(state, shutdown_signal()).await;

    tracing::info!("Shutting down, closing database pool");
    db.close().await;
    result
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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

    tracing::info!("Shutdown signal received");
}
