// src/main.rs

use backend::config::Config;
use backend::routes;
use backend::state::AppState;
use dotenvy::dotenv;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    // Initialize Tracing (Logging)
    let _guard = backend::logging::init(&config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    // All quiz state lives in memory for the life of the process.
    let state = AppState::new(config);

    // Create the Axum application router
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Quiz service listening on {}", addr);

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Quiz service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C, shutting down"),
        Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
    }
}
