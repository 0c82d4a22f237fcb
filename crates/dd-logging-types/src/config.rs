//! Options accepted by `setup_logging`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::enums::LogLevel;
use crate::errors::{LogError, Result};

/// Options for attaching sinks to a root namespace.
///
/// Every field has a default, so an empty YAML document is a valid
/// options file:
///
/// ```yaml
/// adapter: openrouter
/// log_level: debug
/// log_dir: ~/work/logs
/// console: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupOptions {
    /// Tag inserted into the file name after the run name (omitted if empty)
    pub adapter: String,
    /// Sink threshold; unrecognized names mean `info`
    pub log_level: String,
    /// Directory for log files; `./logs` under the working directory if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    /// Also mirror records to standard error
    pub console: bool,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            adapter: String::new(),
            log_level: LogLevel::Info.key().to_string(),
            log_dir: None,
            console: false,
        }
    }
}

impl SetupOptions {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the adapter tag.
    pub fn adapter(mut self, adapter: impl Into<String>) -> Self {
        self.adapter = adapter.into();
        self
    }

    /// Set the level name.
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the log directory.
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Enable or disable the console mirror.
    pub fn console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// The threshold `log_level` resolves to.
    pub fn level(&self) -> LogLevel {
        LogLevel::resolve(&self.log_level)
    }

    /// Parse options from a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(Into::into)
    }

    /// Load options from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LogError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }
}
