//! Error types for the leveled file logger

use std::io;
use std::path::PathBuf;

use crate::Level;

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A log file could not be opened.
    #[error("failed to open {level} log at {}: {source}", path.display())]
    Open {
        /// Channel whose file failed to open
        level: Level,
        /// The configured path
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Buffered bytes could not be written out.
    #[error("failed to flush {level} log at {}: {source}", path.display())]
    Flush {
        /// Channel whose flush failed
        level: Level,
        /// The configured path
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// One or more channels failed during an aggregate flush.
    #[error("failed to flush {} log channel(s)", .0.len())]
    PartialFlush(Vec<(Level, io::Error)>),

    /// Path configuration could not be parsed.
    #[error("invalid log path configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A level name did not match any known level.
    #[error("unknown log level: {0}")]
    UnknownLevel(String),
}
