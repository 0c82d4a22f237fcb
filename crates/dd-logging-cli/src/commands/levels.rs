//! List level names and thresholds.

use anyhow::Result;
use dd_logging::LOG_LEVELS;

pub fn execute() -> Result<()> {
    for (name, level) in LOG_LEVELS {
        println!("{:<8} {}", name, level.value());
    }
    Ok(())
}
