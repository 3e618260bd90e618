//! HTTP protocol layer module
//!
//! Response primitives and MIME detection shared by the JSON and file helpers.

pub mod mime;
pub mod response;

// Re-export commonly used types
pub use mime::{ExtensionMimeDetector, MimeDetector};
pub use response::{build_file_response, build_json_response};
