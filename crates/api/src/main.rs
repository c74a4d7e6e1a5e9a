use std::net::SocketAddr;
use std::sync::Arc;

use booker_core::profile::create_profile_source;
use booker_db::StoreConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use booker_api::config::ServerConfig;
use booker_api::router::build_app_router;
use booker_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "booker_api=debug,booker_db=debug,booker_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store ---
    let store = booker_db::connect_store(&StoreConfig::from_env())
        .await
        .expect("Failed to initialize artist store");

    match store.ping().await {
        Ok(()) => tracing::info!(backend = store.backend(), "Store connection test passed"),
        Err(e) => tracing::warn!(
            backend = store.backend(),
            error = %e,
            "Store connection test failed"
        ),
    }

    // --- Profile source ---
    let profiles = create_profile_source(config.profile_source);
    tracing::info!(source = profiles.name(), "Profile source ready");

    // --- App state ---
    let state = AppState {
        store: Arc::clone(&store),
        profiles,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");
    store.close().await;
    tracing::info!(backend = store.backend(), "Store closed");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
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
