//! # dd-logging types
//!
//! Types shared across the dd-logging crates:
//!
//! - [`LogLevel`], the ordered severity threshold
//! - [`SetupOptions`], the serde-loadable options for `setup_logging`
//! - [`LogError`] and the [`Result`] alias
//!
//! ## Example
//!
//! ```
//! use dd_logging_types::{LogLevel, SetupOptions};
//!
//! let opts = SetupOptions::new().adapter("openrouter").log_level("Warning");
//! assert_eq!(opts.level(), LogLevel::Warning);
//!
//! // Unrecognized names fall back to info
//! assert_eq!(LogLevel::resolve("chatty"), LogLevel::Info);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod config;

// Re-export common types for convenience
pub use errors::{LogError, Result};
pub use enums::LogLevel;
pub use config::SetupOptions;
