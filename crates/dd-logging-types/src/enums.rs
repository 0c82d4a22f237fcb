//! Log level enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{LogError, Result};

/// Severity threshold, ordered `Debug < Info < Warning < Error`.
///
/// The discriminants are the numeric thresholds used when comparing a
/// record against a logger or sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail
    Debug = 10,
    /// Normal progress messages
    Info = 20,
    /// Something unexpected that the run survives
    Warning = 30,
    /// A failure
    Error = 40,
}

impl LogLevel {
    /// All levels, most permissive first.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Upper-case name as it appears in formatted output.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// Lower-case key used in options and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }

    /// Numeric threshold.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Case-insensitive lookup of a level key.
    pub fn from_name(name: &str) -> Option<LogLevel> {
        let lower = name.to_lowercase();
        LogLevel::ALL.into_iter().find(|level| level.key() == lower)
    }

    /// Lenient lookup: anything unrecognized resolves to `Info`.
    pub fn resolve(name: &str) -> LogLevel {
        LogLevel::from_name(name).unwrap_or_default()
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        LogLevel::from_name(s).ok_or_else(|| LogError::InvalidLevel(s.to_string()))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment specifiers apply
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert_eq!(LogLevel::Warning.value(), 30);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(LogLevel::from_name("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_name("Warning"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_name("warn"), None);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:<7}|", LogLevel::Info), "INFO   |");
        assert_eq!(format!("{:<7}|", LogLevel::Warning), "WARNING|");
        assert_eq!(LogLevel::Error.to_string(), "ERROR");
    }

    proptest! {
        #[test]
        fn unknown_names_resolve_to_info(name in "[a-z]{0,12}") {
            prop_assume!(LogLevel::from_name(&name).is_none());
            prop_assert_eq!(LogLevel::resolve(&name), LogLevel::Info);
        }
    }
}
