//! Leveled, structured logging contract and the tracing-backed default.

use std::sync::Mutex;

/// Severity of a log entry.
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
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Structured logging sink used throughout the parse pipeline.
///
/// `fields` are key/value pairs attached to the message.
pub trait Logger: Send + Sync {
    /// Emit one entry.
    fn log(&self, level: LogLevel, message: &str, fields: &[(&str, &str)]);

    fn debug(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(LogLevel::Debug, message, fields);
    }

    fn info(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(LogLevel::Info, message, fields);
    }

    fn warn(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(LogLevel::Warn, message, fields);
    }

    fn error(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(LogLevel::Error, message, fields);
    }
}

// ─── TracingLogger ────────────────────────────────────────────────────────────

/// Default logger — forwards entries to the process-wide `tracing`
/// subscriber, which writes to standard output unless configured otherwise.
///
/// Usable with zero configuration; if no subscriber is installed the entries
/// are simply dropped, never an error.
#[derive(Debug, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }

    fn render(fields: &[(&str, &str)]) -> String {
        fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, fields: &[(&str, &str)]) {
        let fields = Self::render(fields);
        match level {
            LogLevel::Debug => tracing::debug!(%fields, "{message}"),
            LogLevel::Info => tracing::info!(%fields, "{message}"),
            LogLevel::Warn => tracing::warn!(%fields, "{message}"),
            LogLevel::Error => tracing::error!(%fields, "{message}"),
        }
    }
}

// ─── MemoryLogger ─────────────────────────────────────────────────────────────

/// In-memory logger that records entries, for tests and ephemeral tooling.
#[derive(Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str, fields: &[(&str, &str)]) {
        let rendered = if fields.is_empty() {
            message.to_string()
        } else {
            format!("{message} {}", TracingLogger::render(fields))
        };
        self.entries.lock().unwrap().push((level, rendered));
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_logger_records_entries_in_order() {
        let logger = MemoryLogger::new();
        logger.info("started", &[("chain", "cosmoshub-4")]);
        logger.warn("node lagging", &[]);

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (LogLevel::Info, "started chain=cosmoshub-4".into()));
        assert_eq!(entries[1], (LogLevel::Warn, "node lagging".into()));
    }

    #[test]
    fn tracing_logger_usable_without_subscriber() {
        // Must not panic even when no subscriber is installed.
        let logger = TracingLogger::new();
        logger.debug("resolved defaults", &[("slots", "6")]);
        logger.error("boom", &[]);
    }

    #[test]
    fn level_display() {
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }
}
