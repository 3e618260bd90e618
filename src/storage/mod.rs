//! Storage module
//!
//! Named disks that file responses read from:
//! - `LocalDisk` for a directory on the local filesystem
//! - `MemoryDisk` for in-process content and tests

mod local;
mod memory;

use std::collections::HashMap;
use std::sync::Arc;

use hyper::body::Bytes;

use crate::config::StorageConfig;
use crate::error::{Error, Result};

pub use local::LocalDisk;
pub use memory::MemoryDisk;

/// A logical storage location addressed by relative paths
pub trait Disk: Send + Sync {
    fn exists(&self, path: &str) -> bool;

    /// Read the full content of `path`
    fn get(&self, path: &str) -> Result<Bytes>;

    fn put(&self, path: &str, contents: Bytes) -> Result<()>;
}

/// Registry of named disks
///
/// Disk names are case-insensitive and stored lowercased, matching the keys
/// the configuration loader produces.
pub struct Storage {
    default_disk: String,
    disks: HashMap<String, Arc<dyn Disk>>,
}

impl Storage {
    /// Empty registry whose default disk is `default_disk`
    pub fn new(default_disk: impl Into<String>) -> Self {
        Self {
            default_disk: disk_key(&default_disk.into()),
            disks: HashMap::new(),
        }
    }

    /// Register a `LocalDisk` for every configured disk
    pub fn from_config(config: &StorageConfig) -> Self {
        let mut storage = Self::new(config.default_disk.clone());
        for (name, disk) in &config.disks {
            storage.register(name.clone(), Arc::new(LocalDisk::new(&disk.root)));
        }
        storage
    }

    pub fn default_disk(&self) -> &str {
        &self.default_disk
    }

    /// Add or replace the disk called `name`
    pub fn register(&mut self, name: impl Into<String>, disk: Arc<dyn Disk>) -> &mut Self {
        self.disks.insert(disk_key(&name.into()), disk);
        self
    }

    /// Replace the disk called `name` with an empty `MemoryDisk` and return it
    pub fn fake(&mut self, name: impl Into<String>) -> Arc<MemoryDisk> {
        let disk = Arc::new(MemoryDisk::new());
        self.register(name, disk.clone());
        disk
    }

    /// Resolve a disk by name
    pub fn disk(&self, name: &str) -> Result<Arc<dyn Disk>> {
        self.disks
            .get(&disk_key(name))
            .cloned()
            .ok_or_else(|| Error::DiskNotConfigured(name.to_string()))
    }
}

fn disk_key(name: &str) -> String {
    name.to_ascii_lowercase()
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.disks.keys().collect();
        names.sort();
        f.debug_struct("Storage")
            .field("default_disk", &self.default_disk)
            .field("disks", &names)
            .finish()
    }
}
