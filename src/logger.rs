//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log
//! entries into a shared buffer; the render loop drains the buffer into the
//! application state so the debug overlay can display them.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::{Arc, Mutex};

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that captures logs to a shared buffer
///
pub struct BufferLogger {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl BufferLogger {
    pub fn new(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        BufferLogger { buffer }
    }
}

impl Log for BufferLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut buffer) = self.buffer.lock() {
                buffer.push(format_log(record));
            }
            // If the lock fails the entry is dropped; logging is never
            // allowed to block or fail the caller.
        }
    }

    fn flush(&self) {
        // No-op
    }
}

/// Install the buffer logger as the global logger and return the shared
/// buffer for the render loop to drain.
///
pub fn init(level: LevelFilter) -> Result<Arc<Mutex<Vec<String>>>, SetLoggerError> {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    log::set_boxed_logger(Box::new(BufferLogger::new(Arc::clone(&buffer))))?;
    log::set_max_level(level);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_logger_captures_formatted_records() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let logger = BufferLogger::new(Arc::clone(&buffer));
        logger.log(
            &Record::builder()
                .args(format_args!("hello from test"))
                .level(Level::Info)
                .build(),
        );
        let entries = buffer.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("INFO"));
        assert!(entries[0].contains("hello from test"));
    }

    #[test]
    fn format_log_includes_level() {
        let record = Record::builder()
            .args(format_args!("payload"))
            .level(Level::Warn)
            .build();
        let formatted = format_log(&record);
        assert!(formatted.contains("WARN"));
        assert!(formatted.contains("payload"));
    }
}
