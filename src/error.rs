// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

// Display text is the caller-visible `error` field.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Server missing API Key in .env file")]
    MissingApiKey,

    // Non-success upstream status.
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidUpstreamBody(#[from] serde_json::Error),

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %error, "Server Error");
        } else {
            tracing::warn!(error = %error, "Rejected request");
        }

        (status, Json(ErrorResponse { error })).into_response()
    }
}
