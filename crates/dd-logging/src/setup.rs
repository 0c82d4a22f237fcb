//! Configuring and silencing root namespaces.

use dd_logging_types::{Result, SetupOptions};
use std::path::PathBuf;
use crate::logger::Logger;
use crate::registry::Registry;
use crate::sink::Sink;
use crate::time;
use crate::util::fs::{ensure_dir, log_file_name, resolve_log_dir};

impl Registry {
    /// Attach a timestamped file sink to the `root_name` logger.
    ///
    /// Safe to call repeatedly: file sinks from an earlier call are
    /// replaced, so the node always holds exactly one. Console sinks are
    /// added on every call with `console` set and are not deduplicated.
    ///
    /// The directory is created and the file opened before the node is
    /// touched, so on error the node is left as it was.
    ///
    /// Returns the absolute path of the log file.
    pub fn setup_logging(
        &self,
        run_name: &str,
        root_name: &str,
        options: &SetupOptions,
    ) -> Result<PathBuf> {
        let dir = resolve_log_dir(options.log_dir.as_deref())?;
        ensure_dir(&dir)?;

        let stamp = time::run_stamp(time::now());
        let path = dir.join(log_file_name(run_name, &options.adapter, &stamp));
        let level = options.level();

        let file = Sink::file(&path, level)?;
        let console = options.console.then(|| Sink::console(level));

        self.logger(root_name).install(file, console);

        tracing::debug!(
            root = root_name,
            path = %path.display(),
            level = %level,
            console = options.console,
            "log sinks attached"
        );
        Ok(path)
    }

    /// The logger named `<root_name>.<name>`.
    pub fn child(&self, name: &str, root_name: &str) -> Logger {
        self.logger(&format!("{}.{}", root_name, name))
    }

    /// Remove every sink from `root_name` and stop propagation.
    pub fn disable(&self, root_name: &str) {
        self.logger(root_name).silence();
        tracing::debug!(root = root_name, "log sinks removed");
    }
}

/// Attach a timestamped file sink to `root_name` in the global registry.
///
/// See [`Registry::setup_logging`].
pub fn setup_logging(run_name: &str, root_name: &str, options: &SetupOptions) -> Result<PathBuf> {
    Registry::global().setup_logging(run_name, root_name, options)
}

/// The global logger named `<root_name>.<name>`.
pub fn get_logger(name: &str, root_name: &str) -> Logger {
    Registry::global().child(name, root_name)
}

/// Silence `root_name` in the global registry.
pub fn disable_logging(root_name: &str) {
    Registry::global().disable(root_name)
}
