// In-process disk, used as a fake in tests and for embedded content

use std::collections::HashMap;
use std::io;
use std::sync::{PoisonError, RwLock};

use hyper::body::Bytes;

use super::Disk;
use crate::error::Result;

/// A disk holding its files in memory
#[derive(Debug, Default)]
pub struct MemoryDisk {
    files: RwLock<HashMap<String, Bytes>>,
}

impl MemoryDisk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn key(path: &str) -> &str {
    path.trim_start_matches('/')
}

impl Disk for MemoryDisk {
    fn exists(&self, path: &str) -> bool {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key(path))
    }

    fn get(&self, path: &str) -> Result<Bytes> {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key(path))
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()).into())
    }

    fn put(&self, path: &str, contents: Bytes) -> Result<()> {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key(path).to_string(), contents);
        Ok(())
    }
}
