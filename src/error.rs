//! Error types
//!
//! Every failure a helper can surface, with the HTTP status it maps to.

use hyper::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::api::JsonResponse;

/// Message carried by [`Error::FileNotFound`]
pub const FILE_NOT_FOUND_MESSAGE: &str = "File not found in the given disk.";

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for storage and file response operations
#[derive(Debug, Error)]
pub enum Error {
    // -------------------------------------------------------------------------
    // File responses
    // -------------------------------------------------------------------------
    #[error("{}", FILE_NOT_FOUND_MESSAGE)]
    FileNotFound { disk: String, path: String },

    // -------------------------------------------------------------------------
    // Storage
    // -------------------------------------------------------------------------
    #[error("Disk [{0}] is not configured")]
    DiskNotConfigured(String),

    #[error("Path escapes the disk root: {0}")]
    PathOutsideRoot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// HTTP status associated with this failure
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::FileNotFound { .. } => StatusCode::NOT_FOUND,
            Self::DiskNotConfigured(_)
            | Self::PathOutsideRoot(_)
            | Self::Io(_)
            | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render as an `{"error": message}` envelope with the mapped status
    pub fn to_json_response(&self) -> JsonResponse {
        JsonResponse::new(json!({ "error": self.to_string() }), self.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found() {
        let err = Error::FileNotFound {
            disk: "public".to_string(),
            path: "GhostFile.pdf".to_string(),
        };
        assert_eq!(err.to_string(), FILE_NOT_FOUND_MESSAGE);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_to_json_response() {
        let err = Error::FileNotFound {
            disk: "public".to_string(),
            path: "a.txt".to_string(),
        };
        let response = err.to_json_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.content(),
            r#"{"error":"File not found in the given disk."}"#
        );

        let err = Error::DiskNotConfigured("reports".to_string());
        let response = err.to_json_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.data()["error"], "Disk [reports] is not configured");
    }

    #[test]
    fn test_io_passes_through() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io);
        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::PermissionDenied));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
