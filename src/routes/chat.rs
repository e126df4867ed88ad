use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header},
};
use serde_json::Value;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let payload = read_chat_request(&headers, &body)?;

    let reply = state.gemini.generate(payload.message.as_ref()).await?;

    Ok(Json(ChatResponse { reply }))
}

// Non-JSON content types and empty bodies both leave the message absent.
fn read_chat_request(headers: &HeaderMap, body: &[u8]) -> Result<ChatRequest, AppError> {
    if !is_json_content_type(headers) || body.is_empty() {
        return Ok(ChatRequest::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        AppError::BadRequest(format!("Failed to parse the request body as JSON: {e}"))
    })?;

    ChatRequest::from_json(value).ok_or_else(|| {
        AppError::BadRequest("Request body must be a JSON object or array".to_string())
    })
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn json_headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn empty_json_body_means_no_message() {
        let req = read_chat_request(&json_headers("application/json"), b"").unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn missing_content_type_ignores_the_body() {
        let req = read_chat_request(&HeaderMap::new(), br#"{"message": "hi"}"#).unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn content_type_parameters_are_ignored() {
        let headers = json_headers("Application/JSON; charset=utf-8");
        let req = read_chat_request(&headers, br#"{"message": "hi"}"#).unwrap();
        assert_eq!(req.message, Some(json!("hi")));
    }

    #[test]
    fn array_body_does_not_fill_the_message() {
        let req = read_chat_request(&json_headers("application/json"), br#"["x"]"#).unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn scalar_and_malformed_bodies_are_bad_requests() {
        for body in [&b"null"[..], b"\"hello\"", b"42", b"{not json", b"   "] {
            let err = read_chat_request(&json_headers("application/json"), body).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "body: {body:?}");
        }
    }
}
