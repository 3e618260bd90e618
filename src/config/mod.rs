// Configuration module entry point
// Loads storage and logging settings from defaults, a file and the environment

mod types;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File, FileFormat};

use crate::error::Result;

// Re-export public types
pub use types::{Config, DiskConfig, LoggingConfig, StorageConfig};

/// Environment variable prefix, e.g. `RESPONDER_STORAGE__DEFAULT_DISK`
const ENV_PREFIX: &str = "RESPONDER";

impl Config {
    /// Load configuration from `config.toml` in the working directory
    pub fn load() -> Result<Self> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    /// A missing file is not an error; defaults and environment still apply
    pub fn load_from(config_path: &str) -> Result<Self> {
        let settings = Self::builder()?
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Parse TOML text over the defaults, ignoring the environment
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = Self::builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    fn builder() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("storage.default_disk", defaults.storage.default_disk)?
            .set_default("logging.level", defaults.logging.level)?;

        for (name, disk) in defaults.storage.disks {
            builder = builder.set_default(format!("storage.disks.{name}.root"), disk.root)?;
        }

        Ok(builder)
    }
}
