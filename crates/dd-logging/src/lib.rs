//! # dd-logging
//!
//! Namespaced, timestamped file logging for command-line and interactive
//! applications.
//!
//! Each project owns a root namespace (`spl`, `spl_flow`, ...) and gets an
//! isolated logger hierarchy under it:
//!
//! - **Setup**: [`setup_logging`] attaches one timestamped file sink (and
//!   optionally a stderr mirror) to the root namespace; calling it again
//!   replaces the file sink
//! - **Lookup**: [`get_logger`] returns `<root>.<sub.path>` loggers
//! - **Silence**: [`disable_logging`] strips every sink from the root
//!
//! Log files are named `<log_dir>/<run_name>[-<adapter>]-<YYYYMMDD-HHMMSS>.log`
//! and every line looks like `14:30:22  INFO     spl.executor  message`.
//!
//! ## Example
//!
//! ```no_run
//! use dd_logging::{disable_logging, get_logger, setup_logging, SetupOptions};
//!
//! let path = setup_logging("run", "spl", &SetupOptions::new().adapter("openrouter"))?;
//! println!("logging to {}", path.display());
//!
//! let log = get_logger("executor", "spl");
//! log.info("prompt sent");
//!
//! disable_logging("spl");
//! # Ok::<(), dd_logging::LogError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod format;
pub mod logger;
pub mod registry;
pub mod setup;
pub mod sink;
pub mod time;
pub mod util;

// Re-export commonly used items
pub use format::{Formatter, Record, FORMATTER, LOG_LEVELS};
pub use logger::Logger;
pub use registry::Registry;
pub use setup::{disable_logging, get_logger, setup_logging};
pub use sink::{Sink, SinkKind};
pub use dd_logging_types::{LogError, LogLevel, Result, SetupOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
