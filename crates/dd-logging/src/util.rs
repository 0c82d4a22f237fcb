//! Common utility functions.

pub mod fs;

// Re-export commonly used items
pub use fs::{log_file_name, resolve_log_dir};
