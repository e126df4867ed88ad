// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default)]
pub struct ChatRequest {
    // None when the field was absent; an explicit null stays Some(Value::Null).
    pub message: Option<Value>,
}

impl ChatRequest {
    // Only objects and arrays are accepted bodies, and only an object can carry `message`.
    pub fn from_json(body: Value) -> Option<Self> {
        match body {
            Value::Object(mut fields) => Some(Self { message: fields.remove("message") }),
            Value::Array(_) => Some(Self::default()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_null_message_are_distinct() {
        let absent = ChatRequest::from_json(json!({})).unwrap();
        assert!(absent.message.is_none());

        let null = ChatRequest::from_json(json!({ "message": null })).unwrap();
        assert_eq!(null.message, Some(Value::Null));
    }

    #[test]
    fn non_string_message_is_kept() {
        let req = ChatRequest::from_json(json!({ "message": [1, 2] })).unwrap();
        assert_eq!(req.message, Some(json!([1, 2])));
    }

    #[test]
    fn array_body_has_no_message() {
        let req = ChatRequest::from_json(json!(["x"])).unwrap();
        assert!(req.message.is_none());

        let req = ChatRequest::from_json(json!([])).unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn scalar_bodies_are_rejected() {
        for body in [json!(null), json!("hello"), json!(42), json!(true)] {
            assert!(ChatRequest::from_json(body).is_none());
        }
    }
}
