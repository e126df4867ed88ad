// src/services/gemini.rs

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;

pub const NO_REPLY_FALLBACK: &str = "No response text found.";
pub const UPSTREAM_ERROR_LABEL: &str = "Gemini API Error";

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a Value>,
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_base: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    pub async fn generate(&self, message: Option<&Value>) -> Result<String, AppError> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        let request = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part { text: message }] }],
        };

        tracing::debug!(model = %self.model, has_message = message.is_some(), "Sending request to Gemini API");

        // The URL carries the key, so it is stripped from every transport error.
        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Network(e.without_url()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(e.without_url()))?;
        let body: Value = serde_json::from_slice(&body)?;

        if !status.is_success() {
            tracing::debug!(%status, "Gemini API returned an error");
            return Err(AppError::Upstream(upstream_error_message(&body)));
        }

        Ok(extract_reply(&body))
    }
}

// candidates[0].content.parts[0].text; any missing link or empty text gives the fallback.
pub fn extract_reply(body: &Value) -> String {
    body.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_REPLY_FALLBACK)
        .to_string()
}

pub fn upstream_error_message(body: &Value) -> String {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
        .unwrap_or(UPSTREAM_ERROR_LABEL)
        .to_string()
}
