//! Response helpers for hyper handlers
//!
//! - [`ApiResponder`]: standardized JSON envelopes (`success`, `error`,
//!   `message`) with their HTTP status codes
//! - [`FileResponder`]: download responses for files kept on named disks
//!
//! ```
//! use api_response_helpers::ApiResponder;
//! use serde_json::json;
//!
//! let api = ApiResponder::new();
//! assert_eq!(api.respond_with_success(()).content(), r#"{"success":true}"#);
//! assert_eq!(api.respond_created(&json!({"id": 123})).status(), 201);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod file;
pub mod http;
pub mod logger;
pub mod storage;

pub use api::{ApiResponder, Arrayable, Content, FaultLike, JsonResponse, JsonSerializable, Message};
pub use crate::config::Config;
pub use error::{Error, Result};
pub use file::FileResponder;
pub use http::{ExtensionMimeDetector, MimeDetector};
pub use storage::{Disk, LocalDisk, MemoryDisk, Storage};
