// cam2gpt - Webcam snapshot to OpenAI Vision relay server

use anyhow::Result;
use cam2gpt::config::AppConfig;
use cam2gpt::openai::OpenAiClient;
use cam2gpt::server::create_router;
use cam2gpt::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Phase 1: Load configuration
    let config = AppConfig::load()?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting cam2gpt v{}", env!("CARGO_PKG_VERSION"));

    if config.openai.is_placeholder_key() {
        warn!(
            "OPENAI_API_KEY is not set; upstream requests will fail authentication"
        );
    }

    // Phase 3: Build upstream client
    let openai_client = OpenAiClient::new(&config.openai)?;

    // Phase 4: Build and start HTTP server
    let app = create_router(config.clone(), openai_client)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
