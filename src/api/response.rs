// JSON response type produced by the API helpers

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::Value;

use crate::http;

/// A status code paired with a normalized JSON payload
///
/// The payload stays a [`Value`] until `into_response` is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonResponse {
    status: StatusCode,
    data: Value,
}

impl JsonResponse {
    pub const fn new(data: Value, status: StatusCode) -> Self {
        Self { status, data }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn data(&self) -> &Value {
        &self.data
    }

    /// Compact JSON text of the payload, keys in insertion order
    pub fn content(&self) -> String {
        self.data.to_string()
    }

    /// Build the hyper response
    pub fn into_response(self) -> Response<Full<Bytes>> {
        http::build_json_response(self.status, self.content())
    }
}

impl From<JsonResponse> for Response<Full<Bytes>> {
    fn from(response: JsonResponse) -> Self {
        response.into_response()
    }
}
