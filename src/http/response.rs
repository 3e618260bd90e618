//! HTTP response building module
//!
//! The two primitives every helper ends in: a JSON body with a status, and a
//! buffered file download.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Build a JSON response from already serialized text
pub fn build_json_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            build_500_response()
        })
}

/// Build 200 response carrying a whole file as an attachment
pub fn build_file_response(data: Bytes, content_type: &str, filename: &str) -> Response<Full<Bytes>> {
    let content_length = data.len();

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header(
            "Content-Disposition",
            format!("attachment; filename='{filename}'"),
        )
        .header("Content-Length", content_length)
        .body(Full::new(data))
        .unwrap_or_else(|e| {
            log_build_error("file", &e);
            build_500_response()
        })
}

fn build_500_response() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
