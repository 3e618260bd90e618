//! API response helpers
//!
//! Builds the JSON envelopes handlers return: success payloads, error
//! payloads under conventional keys, and their HTTP status codes.
//! A handler embeds one [`ApiResponder`] and calls the helper it needs.

mod content;
mod message;
mod response;

use hyper::StatusCode;
use serde_json::{json, Map, Value};

pub use content::{is_empty_container, Arrayable, Content, JsonSerializable};
pub use message::{FaultLike, Message};
pub use response::JsonResponse;

const DEFAULT_ERROR_KEY: &str = "error";
const DEFAULT_VALIDATION_KEY: &str = "message";

/// JSON response helpers with a per-instance default success payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponder {
    default_success: Map<String, Value>,
}

impl Default for ApiResponder {
    fn default() -> Self {
        let mut default_success = Map::new();
        default_success.insert("success".to_string(), Value::Bool(true));
        Self { default_success }
    }
}

impl ApiResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload returned by `respond_with_success` when given no content
    pub const fn default_success(&self) -> &Map<String, Value> {
        &self.default_success
    }

    /// Replace the default success payload; `None` means `{}`
    pub fn set_default_success(&mut self, content: Option<Map<String, Value>>) -> &mut Self {
        self.default_success = content.unwrap_or_default();
        self
    }

    /// 404 with `{"error": message}`
    pub fn respond_not_found<'a>(&self, message: impl Into<Message<'a>>) -> JsonResponse {
        self.respond_not_found_with_key(message, DEFAULT_ERROR_KEY)
    }

    /// 404 with `{key: message}`
    pub fn respond_not_found_with_key<'a>(
        &self,
        message: impl Into<Message<'a>>,
        key: &str,
    ) -> JsonResponse {
        keyed_message(key, message.into(), StatusCode::NOT_FOUND)
    }

    /// 200 with the normalized content, or the default success payload when
    /// the content is absent or an empty container
    pub fn respond_with_success<'a>(&self, contents: impl Into<Content<'a>>) -> JsonResponse {
        let data = match contents.into().normalize() {
            Some(value) if !is_empty_container(&value) => value,
            _ => Value::Object(self.default_success.clone()),
        };

        JsonResponse::new(data, StatusCode::OK)
    }

    /// 200 with `{"success": message}`
    pub fn respond_ok(&self, message: &str) -> JsonResponse {
        self.respond_with_success(&json!({ "success": message }))
    }

    /// 401 with `{"error": message}`, defaulting to "Unauthenticated"
    pub fn respond_unauthenticated(&self, message: Option<&str>) -> JsonResponse {
        error_envelope(message.unwrap_or("Unauthenticated"), StatusCode::UNAUTHORIZED)
    }

    /// 403 with `{"error": message}`, defaulting to "Forbidden"
    pub fn respond_forbidden(&self, message: Option<&str>) -> JsonResponse {
        error_envelope(message.unwrap_or("Forbidden"), StatusCode::FORBIDDEN)
    }

    /// 400 with `{"error": message}`, defaulting to "Error"
    pub fn respond_error(&self, message: Option<&str>) -> JsonResponse {
        error_envelope(message.unwrap_or("Error"), StatusCode::BAD_REQUEST)
    }

    /// 201 with the normalized content; absent content becomes `{}`
    pub fn respond_created<'a>(&self, data: impl Into<Content<'a>>) -> JsonResponse {
        JsonResponse::new(normalize_or_empty(data.into()), StatusCode::CREATED)
    }

    /// 422 with `{"message": message}`
    pub fn respond_failed_validation<'a>(&self, message: impl Into<Message<'a>>) -> JsonResponse {
        self.respond_failed_validation_with_key(message, DEFAULT_VALIDATION_KEY)
    }

    /// 422 with `{key: message}`
    pub fn respond_failed_validation_with_key<'a>(
        &self,
        message: impl Into<Message<'a>>,
        key: &str,
    ) -> JsonResponse {
        keyed_message(key, message.into(), StatusCode::UNPROCESSABLE_ENTITY)
    }

    /// 418 with `{"message": "I'm a teapot"}`
    pub fn respond_teapot(&self) -> JsonResponse {
        JsonResponse::new(json!({ "message": "I'm a teapot" }), StatusCode::IM_A_TEAPOT)
    }

    /// 204 with the normalized content; absent content becomes `{}`
    pub fn respond_no_content<'a>(&self, data: impl Into<Content<'a>>) -> JsonResponse {
        JsonResponse::new(normalize_or_empty(data.into()), StatusCode::NO_CONTENT)
    }
}

fn keyed_message(key: &str, message: Message<'_>, status: StatusCode) -> JsonResponse {
    let mut data = Map::new();
    data.insert(key.to_string(), Value::String(message.into_text().into_owned()));
    JsonResponse::new(Value::Object(data), status)
}

fn error_envelope(message: &str, status: StatusCode) -> JsonResponse {
    JsonResponse::new(json!({ "error": message }), status)
}

// Empty containers keep their shape; only absence is replaced.
fn normalize_or_empty(content: Content<'_>) -> Value {
    content
        .normalize()
        .unwrap_or_else(|| Value::Object(Map::new()))
}
