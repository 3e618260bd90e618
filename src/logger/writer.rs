//! Log writer module
//!
//! Provides thread-safe log writing to a file or stdout/stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

use super::Level;

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    /// stdout for info/debug, stderr for warn/error
    Console,
    /// Everything to one file
    File(Mutex<File>),
}

/// Thread-safe log writer
pub struct LogWriter {
    level: Level,
    target: LogTarget,
}

impl LogWriter {
    /// Create a new log writer with an optional file path
    fn new(level: Level, log_file: Option<&str>) -> io::Result<Self> {
        let target = match log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Console,
        };

        Ok(Self { level, target })
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    /// Write a line if `level` passes the configured filter
    pub fn write(&self, level: Level, line: &str) {
        if self.enabled(level) {
            write_to_target(&self.target, level, line);
        }
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Write line to log target
fn write_to_target(target: &LogTarget, level: Level, line: &str) {
    match target {
        LogTarget::Console if level <= Level::Warn => eprintln!("{line}"),
        LogTarget::Console => println!("{line}"),
        LogTarget::File(file) => {
            let mut f = file.lock().unwrap_or_else(PoisonError::into_inner);
            let _ = writeln!(f, "{line}");
        }
    }
}

/// Write through the global writer, or straight to the console before `init`
pub fn write(level: Level, line: &str) {
    match LOG_WRITER.get() {
        Some(writer) => writer.write(level, line),
        None if level <= Level::Info => write_to_target(&LogTarget::Console, level, line),
        None => {}
    }
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
/// Returns error if the log file cannot be opened.
pub fn init(level: Level, log_file: Option<&str>) -> io::Result<()> {
    let writer = LogWriter::new(level, log_file)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        let writer = LogWriter::new(Level::Warn, None).unwrap();
        assert!(writer.enabled(Level::Error));
        assert!(writer.enabled(Level::Warn));
        assert!(!writer.enabled(Level::Info));
        assert!(!writer.enabled(Level::Debug));
    }

    #[test]
    fn test_file_target() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs/responder.log");
        let writer = LogWriter::new(Level::Info, path.to_str()).unwrap();

        writer.write(Level::Info, "served");
        writer.write(Level::Debug, "dropped");
        writer.write(Level::Error, "failed");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "served\nfailed\n");
    }
}
