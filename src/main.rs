//! Claudius relay server
//!
//! Serves `POST /api/claude` and forwards conversations to the Anthropic API.

use claudius::api::{create_router, AppState};
use claudius::llm::{AnthropicService, LlmConfig, LoggingService};
use claudius::relay::MODEL_ID;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "claudius=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("CLAUDIUS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let llm_config = LlmConfig::from_env();
    if !llm_config.has_api_key() {
        tracing::warn!("ANTHROPIC_API_KEY is not set; relay calls will fail authentication");
    }

    let anthropic = AnthropicService::new(&llm_config)?;
    let llm = Arc::new(LoggingService::new(Arc::new(anthropic)));
    tracing::info!(model = MODEL_ID, url = %llm_config.messages_url(), "Inference API configured");

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(AppState::new(llm))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Claudius relay listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
