// src/routes/mod.rs
pub mod chat;

use crate::config::Config;
use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub fn create_router(config: &Config) -> Router<SharedState> {
    let index = ServeFile::new(config.static_dir.join("index.html"));

    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .route_service("/", index)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
}
