//! File response module
//!
//! Turns a file stored on a named disk into a download response. The whole
//! file is read into memory before the response is built.

use std::path::Path;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::error::{Error, Result};
use crate::http::{self, ExtensionMimeDetector, MimeDetector};
use crate::logger;
use crate::storage::Storage;

/// Serves files from the disks of a [`Storage`]
#[derive(Debug, Clone)]
pub struct FileResponder<D = ExtensionMimeDetector> {
    storage: Arc<Storage>,
    /// Disk to read from; falls back to the storage default when unset
    disk: Option<String>,
    detector: D,
}

impl FileResponder {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self::with_detector(storage, ExtensionMimeDetector)
    }
}

impl<D: MimeDetector> FileResponder<D> {
    pub const fn with_detector(storage: Arc<Storage>, detector: D) -> Self {
        Self {
            storage,
            disk: None,
            detector,
        }
    }

    pub fn set_disk(&mut self, disk: Option<String>) -> &mut Self {
        self.disk = disk;
        self
    }

    /// Disk name `respond_with_file` reads from
    pub fn disk(&self) -> &str {
        self.disk
            .as_deref()
            .unwrap_or_else(|| self.storage.default_disk())
    }

    /// Respond with the file at `path` as an attachment
    ///
    /// Fails with [`Error::FileNotFound`] (404) when the disk has no such
    /// file; read errors from the disk are returned unchanged.
    pub fn respond_with_file(&self, path: &str) -> Result<Response<Full<Bytes>>> {
        let disk_name = self.disk();
        let disk = self.storage.disk(disk_name)?;

        if !disk.exists(path) {
            return Err(Error::FileNotFound {
                disk: disk_name.to_string(),
                path: path.to_string(),
            });
        }

        let content = disk.get(path)?;
        let content_type = self.detector.detect(path, &content);
        let filename = basename(path);

        logger::log_file_served(disk_name, path, content.len(), &content_type);
        Ok(http::build_file_response(content, &content_type, filename))
    }
}

fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
