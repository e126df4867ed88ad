use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gemini_relay::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gemini_relay=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(&config));

    let app = routes::create_router(&config)
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    if config.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set, /api/chat will answer 500 until it is");
    }
    info!(
        model = %config.model,
        api_key_loaded = config.api_key.is_some(),
        static_dir = %config.static_dir.display(),
        "🤖 AI chat relay running at http://localhost:{}",
        config.port
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
