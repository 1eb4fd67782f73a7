mod config;
mod errors;
mod llm_client;
mod models;
mod polish;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::polish::{EchoPolisher, LlmPolisher, Polisher};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Generator API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize polish backend (echo fallback keeps the endpoints usable
    // without a key)
    let polisher: Arc<dyn Polisher> = match config.anthropic_api_key.clone() {
        Some(api_key) => {
            info!("LLM polisher initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmPolisher(LlmClient::new(api_key)))
        }
        None => {
            info!("No ANTHROPIC_API_KEY set; AI endpoints will echo input");
            Arc::new(EchoPolisher)
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        polisher,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
