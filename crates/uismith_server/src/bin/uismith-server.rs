//! uismith server - HTTP relay for AI-generated UI components.
//!
//! Accepts a prompt and a target framework name, forwards a constructed
//! instruction prompt to Gemini (fast tier first, stronger tier on
//! failure), and returns the raw HTML produced.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uismith_error::{ServerError, UismithResult};
use uismith_models::{FallbackGenerator, GeminiClient};
use uismith_server::{ServerConfig, create_router};

#[tokio::main]
async fn main() -> UismithResult<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration is validated before any listener is bound; a missing
    // API key is fatal at startup, never a per-request error.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    let primary = GeminiClient::new(config.api_key().clone(), config.models().primary())?;
    let fallback = GeminiClient::new(config.api_key().clone(), config.models().fallback())?;
    let generator = FallbackGenerator::new(primary, fallback);

    let app = create_router(Arc::new(generator)).layer(config.cors_layer()?);

    let addr = SocketAddr::from(([0, 0, 0, 0], *config.port()));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::new(format!("Failed to bind {}: {}", addr, e)))?;

    info!(
        %addr,
        primary = config.models().primary(),
        fallback = config.models().fallback(),
        "Backend listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(format!("Server error: {}", e)))?;

    Ok(())
}
