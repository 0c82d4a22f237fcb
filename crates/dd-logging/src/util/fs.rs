//! Log directory and file name helpers.

use dd_logging_types::{LogError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory used under the working directory when none is given.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Resolve the directory log files go to, as an absolute path.
///
/// `None` or an empty path means `<cwd>/logs`. Relative directories are
/// taken relative to the current working directory, with no `~` expansion.
pub fn resolve_log_dir(log_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match log_dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from(DEFAULT_LOG_DIR),
    };
    if dir.is_absolute() {
        return Ok(dir);
    }
    let cwd = env::current_dir().map_err(|e| LogError::io(".", e))?;
    Ok(cwd.join(dir))
}

/// Create `dir` and any missing parents. Existing directories are fine.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| LogError::io(dir, e))
}

/// `<run_name>[-<adapter>]-<stamp>.log`, the adapter part omitted when empty.
pub fn log_file_name(run_name: &str, adapter: &str, stamp: &str) -> String {
    if adapter.is_empty() {
        format!("{}-{}.log", run_name, stamp)
    } else {
        format!("{}-{}-{}.log", run_name, adapter, stamp)
    }
}
