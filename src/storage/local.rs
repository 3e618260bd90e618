//! Local filesystem disk
//!
//! Serves files beneath a root directory. Paths are interpreted relative to
//! the root; anything that would leave it is refused.

use std::fs;
use std::path::{Component, Path, PathBuf};

use hyper::body::Bytes;

use super::Disk;
use crate::error::{Error, Result};
use crate::logger;

/// A disk backed by a directory
#[derive(Debug, Clone)]
pub struct LocalDisk {
    root: PathBuf,
}

impl LocalDisk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join `path` onto the root, rejecting traversal and absolute paths
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

        if escapes {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {path} (root {})",
                self.root.display()
            ));
            return Err(Error::PathOutsideRoot(path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

impl Disk for LocalDisk {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.is_file())
    }

    fn get(&self, path: &str) -> Result<Bytes> {
        let full_path = self.resolve(path)?;
        Ok(Bytes::from(fs::read(full_path)?))
    }

    fn put(&self, path: &str, contents: Bytes) -> Result<()> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, &contents)?;
        Ok(())
    }
}
