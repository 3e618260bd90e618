// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Disk used by file responses that name no disk
    #[serde(default = "default_disk_name")]
    pub default_disk: String,
    /// Local disks by name
    #[serde(default)]
    pub disks: HashMap<String, DiskConfig>,
}

/// A local disk rooted at a directory
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DiskConfig {
    pub root: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_disk_name() -> String {
    "public".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        let mut disks = HashMap::new();
        disks.insert(
            "public".to_string(),
            DiskConfig {
                root: "storage/app/public".to_string(),
            },
        );
        disks.insert(
            "local".to_string(),
            DiskConfig {
                root: "storage/app".to_string(),
            },
        );

        Self {
            default_disk: default_disk_name(),
            disks,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level written (error, warn, info, debug)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path (optional, stdout/stderr if not set)
    #[serde(default)]
    pub log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_file: None,
        }
    }
}
