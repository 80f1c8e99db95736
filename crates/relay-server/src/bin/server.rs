use color_eyre::{eyre::Context, Result};
use relay_server::{app_state::AppState, config::Config, routes::router};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Garaga relay server
/// Handles:
/// - submission of Groth16 proof payloads over POST
/// - calldata generation through the external garaga tool
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Load configuration
    let config = Config::from_file("config.json").context("Failed to load config")?;
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_max_level(config.log_level()?)
        .init();

    let state = AppState::from_config(&config);
    let app = router(state, config.max_body_bytes);

    let server_url = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(server_url).await.context(format!(
        "Failed to bind server to port {}",
        config.server_port
    ))?;

    info!("Server running on port {}", config.server_port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server shut down");

    Ok(())
}

/// Resolves once the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let mut term_signal = signal::unix::signal(signal::unix::SignalKind::terminate())
        .expect("Failed to create SIGTERM handler");

    tokio::select! {
        _ = signal::ctrl_c() => tracing::warn!("Received SIGINT (Ctrl+C), shutting down."),
        _ = term_signal.recv() => tracing::warn!("Received SIGTERM, shutting down."),
    }
}
