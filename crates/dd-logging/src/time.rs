//! Timestamp formatting.

use chrono::{DateTime, Local};

/// `strftime` pattern for the timestamp embedded in log file names.
pub const RUN_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// `strftime` pattern for the time column of a log line.
pub const LINE_TIME_FORMAT: &str = "%H:%M:%S";

/// Current local wall-clock time.
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Format a run timestamp, e.g. `20260215-143022`.
pub fn run_stamp(at: DateTime<Local>) -> String {
    at.format(RUN_STAMP_FORMAT).to_string()
}

/// Format the time column of a log line, e.g. `14:30:22`.
pub fn line_time(at: DateTime<Local>) -> String {
    at.format(LINE_TIME_FORMAT).to_string()
}
