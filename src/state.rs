// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            gemini: GeminiClient::new(config),
        }
    }
}
