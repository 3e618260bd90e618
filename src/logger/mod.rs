//! Logger module
//!
//! Provides logging utilities for the response helpers:
//! - Files served from a disk
//! - Refused storage paths
//! - Response build failures
//!
//! Lines are timestamped and tagged, and filtered by the configured level.

pub mod writer;

use std::str::FromStr;

use chrono::Local;

use crate::config::LoggingConfig;

/// Log severity, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(format!("Unknown log level: {other}")),
        }
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    let level = config
        .level
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    writer::init(level, config.log_file.as_deref())
}

fn format_line(tag: &str, message: &str) -> String {
    format!("{} [{tag}] {message}", Local::now().format("%Y-%m-%dT%H:%M:%S"))
}

fn write(level: Level, tag: &str, message: &str) {
    writer::write(level, &format_line(tag, message));
}

pub fn log_error(message: &str) {
    write(Level::Error, "ERROR", message);
}

pub fn log_warning(message: &str) {
    write(Level::Warn, "WARN", message);
}

pub fn log_file_served(disk: &str, path: &str, size: usize, content_type: &str) {
    write(
        Level::Debug,
        "FILE",
        &format!("{disk}:{path} ({size} bytes, {content_type})"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!("error".parse::<Level>(), Ok(Level::Error));
        assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("Info".parse::<Level>(), Ok(Level::Info));
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_order() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Info < Level::Debug);
    }

    #[test]
    fn test_format_line() {
        let line = format_line("FILE", "public:dummy.pdf");
        assert!(line.ends_with(" [FILE] public:dummy.pdf"));
        // YYYY-MM-DDTHH:MM:SS prefix
        assert_eq!(line.find(' '), Some(19));
    }

    #[test]
    fn test_init_rejects_unknown_level() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            log_file: None,
        };
        let err = init(&config).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
