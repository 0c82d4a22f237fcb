//! Preview the log file path for a run.

use anyhow::{Context, Result};
use dd_logging::time;
use dd_logging::util::{log_file_name, resolve_log_dir};
use std::path::Path;

pub fn execute(run: &str, adapter: &str, log_dir: Option<&Path>) -> Result<()> {
    let dir = resolve_log_dir(log_dir).context("Failed to resolve log directory")?;
    let stamp = time::run_stamp(time::now());
    println!("{}", dir.join(log_file_name(run, adapter, &stamp)).display());
    Ok(())
}
