//! Configure a namespace and emit a single record.

use anyhow::{Context, Result};
use dd_logging::{setup_logging, LogLevel, Registry, SetupOptions};
use std::path::{Path, PathBuf};

/// Command-line values that take precedence over the options file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub adapter: Option<String>,
    pub level: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub console: bool,
}

impl Overrides {
    fn apply(self, mut options: SetupOptions) -> SetupOptions {
        if let Some(adapter) = self.adapter {
            options.adapter = adapter;
        }
        if let Some(level) = self.level {
            options.log_level = level;
        }
        if let Some(dir) = self.log_dir {
            options.log_dir = Some(dir);
        }
        if self.console {
            options.console = true;
        }
        options
    }
}

pub fn execute(
    run: &str,
    root: &str,
    config: Option<&Path>,
    overrides: Overrides,
    at: LogLevel,
    logger: Option<&str>,
    message: &str,
) -> Result<()> {
    let options = match config {
        Some(path) => SetupOptions::load(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => SetupOptions::default(),
    };
    let options = overrides.apply(options);

    let path = setup_logging(run, root, &options).context("Failed to set up logging")?;

    let target = match logger {
        Some(sub) => Registry::global().child(sub, root),
        None => Registry::global().logger(root),
    };
    target.log(at, message);
    tracing::debug!(logger = target.name(), level = %at, "message emitted");

    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_file() {
        let file = SetupOptions::new().adapter("file").log_level("debug").console(true);
        let overrides = Overrides {
            adapter: Some("flag".to_string()),
            ..Default::default()
        };

        let merged = overrides.apply(file);
        assert_eq!(merged.adapter, "flag");
        assert_eq!(merged.log_level, "debug");
        // absent --console never switches the file's setting off
        assert!(merged.console);
    }
}
