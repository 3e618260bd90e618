//! MIME type detection module
//!
//! Returns the Content-Type for a file from its extension, falling back to
//! the leading bytes when the name has no known extension.

use std::path::Path;

/// Detects the Content-Type of stored content
pub trait MimeDetector {
    fn detect(&self, path: &str, content: &[u8]) -> String;
}

/// Extension table first, then magic bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionMimeDetector;

impl MimeDetector for ExtensionMimeDetector {
    fn detect(&self, path: &str, content: &[u8]) -> String {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        get_content_type(extension.as_deref())
            .or_else(|| sniff_content_type(content))
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string()
    }
}

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use api_response_helpers::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("pdf")), Some("application/pdf"));
/// assert_eq!(get_content_type(Some("jpg")), Some("image/jpeg"));
/// assert_eq!(get_content_type(None), None);
/// ```
pub fn get_content_type(extension: Option<&str>) -> Option<&'static str> {
    let content_type = match extension? {
        // Text
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css",
        "txt" | "md" => "text/plain; charset=utf-8",
        "csv" => "text/csv",
        "xml" => "application/xml",

        // JavaScript/WASM
        "js" | "mjs" => "application/javascript",
        "json" => "application/json",
        "wasm" => "application/wasm",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",

        // Video
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "ogg" | "ogv" => "video/ogg",
        "mov" => "video/quicktime",

        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",

        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "zip" => "application/zip",
        "gz" | "gzip" => "application/gzip",
        "tar" => "application/x-tar",

        _ => return None,
    };
    Some(content_type)
}

/// Guess Content-Type from leading magic bytes
pub fn sniff_content_type(content: &[u8]) -> Option<&'static str> {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"%PDF-", "application/pdf"),
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"PK\x03\x04", "application/zip"),
        (b"\x1f\x8b", "application/gzip"),
    ];

    if content.len() >= 12 && content.starts_with(b"RIFF") && &content[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    SIGNATURES
        .iter()
        .find(|(magic, _)| content.starts_with(magic))
        .map(|(_, content_type)| *content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(get_content_type(Some("html")), Some("text/html; charset=utf-8"));
        assert_eq!(get_content_type(Some("pdf")), Some("application/pdf"));
        assert_eq!(get_content_type(Some("jpg")), Some("image/jpeg"));
        assert_eq!(get_content_type(Some("json")), Some("application/json"));
        assert_eq!(get_content_type(Some("png")), Some("image/png"));
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("xyz")), None);
        assert_eq!(get_content_type(None), None);
    }

    #[test]
    fn test_detector_uses_extension() {
        let detector = ExtensionMimeDetector;
        assert_eq!(detector.detect("reports/dummy.pdf", b""), "application/pdf");
        assert_eq!(detector.detect("IMAGE.JPG", b""), "image/jpeg");
    }

    #[test]
    fn test_detector_sniffs_without_extension() {
        let detector = ExtensionMimeDetector;
        assert_eq!(detector.detect("download", b"%PDF-1.4\n"), "application/pdf");
        assert_eq!(detector.detect("photo", b"\xff\xd8\xff\xe0\x00\x10JFIF"), "image/jpeg");
        assert_eq!(detector.detect("anim", b"RIFF\x00\x00\x00\x00WEBPVP8 "), "image/webp");
    }

    #[test]
    fn test_detector_default() {
        let detector = ExtensionMimeDetector;
        assert_eq!(detector.detect("blob.bin", b"\x00\x01\x02"), "application/octet-stream");
        assert_eq!(detector.detect("blob", b""), "application/octet-stream");
    }
}
