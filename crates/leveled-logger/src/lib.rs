//! File logger that routes each of eight severities to its own append-only
//! file through a buffered writer.
//!
//! ```no_run
//! use proven_leveled_logger::{log_info, LeveledFileLogger, LogPaths};
//!
//! # fn main() -> proven_leveled_logger::Result<()> {
//! let mut logger = LeveledFileLogger::from_paths(LogPaths::in_dir("logs", "app"));
//! logger.remove_all_old_logs();
//! logger.open_all()?;
//!
//! log_info!(logger, "listening on port {}\n", 8080);
//!
//! logger.close_all()?;
//! # Ok(())
//! # }
//! ```
//!
//! Records are written as `[YYYY-MM-DD HH:MM:SS] <message>` in local time.
//! No newline is appended; include `\n` in the format string. Messages are
//! formatted with [`format_args!`], so a literal `%` is written verbatim and
//! literal braces must be doubled.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod channel;
mod config;
mod diagnostics;
mod error;
mod level;
mod logger;

pub use config::LogPaths;
pub use diagnostics::{BufferSink, DiagnosticSink, StderrSink};
pub use error::{Error, Result};
pub use level::Level;
pub use logger::{LeveledFileLogger, TIMESTAMP_FORMAT};

/// Writes a formatted message to the trace log.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(format_args!($($arg)+))
    };
}

/// Writes a formatted message to the debug log.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Writes a formatted message to the info log.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Writes a formatted message to the notice log.
#[macro_export]
macro_rules! log_notice {
    ($logger:expr, $($arg:tt)+) => {
        $logger.notice(format_args!($($arg)+))
    };
}

/// Writes a formatted message to the warn log.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Writes a formatted message to the error log.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

/// Writes a formatted message to the fatal log and evaluates to the message
/// without its timestamp.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}

/// Writes a formatted message to the print log.
#[macro_export]
macro_rules! log_print {
    ($logger:expr, $($arg:tt)+) => {
        $logger.print(format_args!($($arg)+))
    };
}
