use std::io::{self, Write};
use std::sync::OnceLock;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Diagnostic logger writing to stderr; stdout is reserved for quotes.
#[derive(Debug, Clone)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp: DateTime<Utc> = Utc::now();
        let formatted_timestamp = timestamp.format("%Y-%m-%d %H:%M:%S%.3f UTC");
        format!("[{}] [{}] {}", formatted_timestamp, level, message)
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let line = self.format_line(level, message);
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", line);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn init_global_logger(min_level: LogLevel) -> Result<()> {
    GLOBAL_LOGGER
        .set(Logger::new(min_level))
        .map_err(|_| anyhow!("Logger already initialized"))
}

pub fn get_global_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

/// Whether a message at `level` would be written; false until initialized
pub fn enabled(level: LogLevel) -> bool {
    get_global_logger().is_some_and(|logger| logger.enabled(level))
}

// Convenience functions for global logging; no-ops until initialized
pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = get_global_logger() {
        logger.log(level, message);
    }
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn warn(message: &str) {
    log(LogLevel::Warn, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_level_filtering() {
        let logger = Logger::new(LogLevel::Warn);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));

        let verbose = Logger::new(LogLevel::Debug);
        assert!(verbose.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_format_line() {
        let logger = Logger::default();
        let line = logger.format_line(LogLevel::Info, "selected 3 quotes");
        assert!(line.starts_with('['));
        assert!(line.contains(" UTC] [INFO] selected 3 quotes"));
    }

    #[test]
    fn test_global_helpers_are_silent_before_init() {
        // Must not panic whether or not another test initialized the logger
        debug("before init");
        info("before init");
    }
}
