//! Log records and the fixed line format.
//!
//! Every sink renders records the same way:
//!
//! ```text
//! 14:30:22  INFO     spl.executor  prompt sent
//! ```
//!
//! Time (`HH:MM:SS`), two spaces, the level name left-justified to seven
//! columns, two spaces, the logger name, two spaces, the message.

use chrono::{DateTime, Local};
use dd_logging_types::LogLevel;
use crate::time;

/// Level-name to threshold mapping accepted by `setup_logging`.
pub const LOG_LEVELS: [(&str, LogLevel); 4] = [
    ("debug", LogLevel::Debug),
    ("info", LogLevel::Info),
    ("warning", LogLevel::Warning),
    ("error", LogLevel::Error),
];

/// The shared line formatter.
pub const FORMATTER: Formatter = Formatter;

/// A single log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// When the record was created
    pub time: DateTime<Local>,
    /// Severity
    pub level: LogLevel,
    /// Dotted name of the logger that created it
    pub logger: String,
    /// Rendered message text
    pub message: String,
}

impl Record {
    /// Create a record stamped with the current time.
    pub fn new(level: LogLevel, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            time: time::now(),
            level,
            logger: logger.into(),
            message: message.into(),
        }
    }
}

/// Stateless record-to-line rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter;

impl Formatter {
    /// Render a record as one line, without the trailing newline.
    pub fn format(&self, record: &Record) -> String {
        format!(
            "{}  {:<7}  {}  {}",
            time::line_time(record.time),
            record.level,
            record.logger,
            record.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(level: LogLevel) -> Record {
        Record {
            time: Local.with_ymd_and_hms(2026, 2, 15, 14, 30, 22).unwrap(),
            level,
            logger: "spl.executor".to_string(),
            message: "prompt sent".to_string(),
        }
    }

    #[test]
    fn test_line_layout() {
        assert_eq!(
            FORMATTER.format(&record(LogLevel::Info)),
            "14:30:22  INFO     spl.executor  prompt sent"
        );
        assert_eq!(
            FORMATTER.format(&record(LogLevel::Warning)),
            "14:30:22  WARNING  spl.executor  prompt sent"
        );
    }

    #[test]
    fn test_level_table_matches_enum() {
        for (name, level) in LOG_LEVELS {
            assert_eq!(LogLevel::from_name(name), Some(level));
        }
    }
}
