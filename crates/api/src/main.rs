use std::net::SocketAddr;
use std::time::Duration;

use movies_core::readiness::ReadinessFlag;
use movies_db::DbConfig;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movies_api::background;
use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_api=debug,movies_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(
        host = %config.host,
        port = config.port,
        readiness_delay_secs = config.readiness_delay_secs,
        "Loaded server configuration"
    );

    let db_config = DbConfig::from_env().expect("Invalid database configuration");
    tracing::info!(?db_config, "Loaded database configuration");

    // --- Database ---
    let pool = movies_db::create_pool(&db_config)
        .await
        .expect("Failed to connect to database");

    movies_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Successfully connected to database");

    // --- Readiness ---
    let readiness = ReadinessFlag::new();
    let readiness_cancel = CancellationToken::new();
    let readiness_handle = tokio::spawn(background::readiness::run(
        readiness.clone(),
        Duration::from_secs(config.readiness_delay_secs),
        readiness_cancel.clone(),
    ));

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        readiness,
    };

    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    readiness_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), readiness_handle).await;

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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
