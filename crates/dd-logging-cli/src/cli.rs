//! CLI structure and command definitions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dd_logging_types::LogLevel;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ddlog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Namespaced, timestamped file logging", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show ddlog's own diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure a namespace and write one message to its log file
    Emit {
        /// Run name used as the file name prefix
        run: String,

        /// Root logger namespace
        #[arg(short, long)]
        root: String,

        /// Adapter tag appended to the run name
        #[arg(short, long)]
        adapter: Option<String>,

        /// Sink threshold (debug, info, warning, error)
        #[arg(short, long)]
        level: Option<String>,

        /// Directory for log files [default: ./logs]
        #[arg(long)]
        log_dir: Option<PathBuf>,

        /// Mirror records to stderr
        #[arg(long)]
        console: bool,

        /// YAML options file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Level of the emitted message
        #[arg(long, default_value = "info")]
        at: LogLevel,

        /// Emit through `<root>.<logger>` instead of the root
        #[arg(long)]
        logger: Option<String>,

        /// Message text
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Print the log file path a run started now would use
    Path {
        /// Run name used as the file name prefix
        run: String,

        /// Adapter tag appended to the run name
        #[arg(short, long, default_value = "")]
        adapter: String,

        /// Directory for log files [default: ./logs]
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },

    /// List the accepted level names
    Levels,

    /// Show version information
    Version,
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        match &self.command {
            Commands::Emit {
                run,
                root,
                adapter,
                level,
                log_dir,
                console,
                config,
                at,
                logger,
                message,
            } => {
                let overrides = emit::Overrides {
                    adapter: adapter.clone(),
                    level: level.clone(),
                    log_dir: log_dir.clone(),
                    console: *console,
                };
                emit::execute(
                    run,
                    root,
                    config.as_deref(),
                    overrides,
                    *at,
                    logger.as_deref(),
                    &message.join(" "),
                )
            }
            Commands::Path { run, adapter, log_dir } => {
                path::execute(run, adapter, log_dir.as_deref())
            }
            Commands::Levels => levels::execute(),
            Commands::Version => version::execute(self.verbose),
        }
    }
}
