use std::net::SocketAddr;

use anyhow::Context;

use transit_api::config::AppConfig;
use transit_api::router::build_app_router;
use transit_api::state::AppState;
use transit_api::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = AppConfig::from_env().context("Invalid configuration")?;

    // --- Tracing ---
    telemetry::init(config.server.log_format);
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        environment = %config.database.environment,
        "Loaded server configuration",
    );

    // --- Database ---
    let pool = transit_db::client(&config.database)
        .context("Failed to create database client")?
        .clone();

    // The pool connects lazily; an unreachable database only fails requests.
    match transit_db::health_check(&pool).await {
        Ok(()) => tracing::info!("Database health check passed"),
        Err(e) => tracing::warn!(error = %e, "Database health check failed"),
    }

    if config.server.run_migrations {
        transit_db::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations applied");
    }

    // --- App state ---
    let state = AppState { pool };

    let app = build_app_router(state, &config.server);

    // --- Start server ---
    let addr = SocketAddr::new(config.server.host, config.server.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
