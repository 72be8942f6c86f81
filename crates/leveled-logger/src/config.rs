//! Destination paths for the eight log channels

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Level, Result};

/// One destination file per level.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LogPaths {
    /// Trace log path
    pub trace: PathBuf,
    /// Debug log path
    pub debug: PathBuf,
    /// Info log path
    pub info: PathBuf,
    /// Notice log path
    pub notice: PathBuf,
    /// Warn log path
    pub warn: PathBuf,
    /// Error log path
    pub error: PathBuf,
    /// Fatal log path
    pub fatal: PathBuf,
    /// Print log path
    pub print: PathBuf,
}

impl LogPaths {
    /// Creates paths from eight positional arguments, in level order.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trace: impl Into<PathBuf>,
        debug: impl Into<PathBuf>,
        info: impl Into<PathBuf>,
        notice: impl Into<PathBuf>,
        warn: impl Into<PathBuf>,
        error: impl Into<PathBuf>,
        fatal: impl Into<PathBuf>,
        print: impl Into<PathBuf>,
    ) -> Self {
        Self {
            trace: trace.into(),
            debug: debug.into(),
            info: info.into(),
            notice: notice.into(),
            warn: warn.into(),
            error: error.into(),
            fatal: fatal.into(),
            print: print.into(),
        }
    }

    /// Places every channel in `dir` as `<stem>.<level>.log`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>, stem: &str) -> Self {
        let dir = dir.as_ref();
        let file = |level: Level| dir.join(format!("{stem}.{level}.log"));

        Self {
            trace: file(Level::Trace),
            debug: file(Level::Debug),
            info: file(Level::Info),
            notice: file(Level::Notice),
            warn: file(Level::Warn),
            error: file(Level::Error),
            fatal: file(Level::Fatal),
            print: file(Level::Print),
        }
    }

    /// Parses paths from a TOML table with one key per level.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the text is not valid TOML or a key is missing.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Returns the path configured for `level`.
    #[must_use]
    pub fn get(&self, level: Level) -> &Path {
        match level {
            Level::Trace => &self.trace,
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Notice => &self.notice,
            Level::Warn => &self.warn,
            Level::Error => &self.error,
            Level::Fatal => &self.fatal,
            Level::Print => &self.print,
        }
    }

    pub(crate) fn into_array(self) -> [PathBuf; Level::COUNT] {
        [
            self.trace,
            self.debug,
            self.info,
            self.notice,
            self.warn,
            self.error,
            self.fatal,
            self.print,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir() {
        let paths = LogPaths::in_dir("/var/log/app", "game");

        assert_eq!(paths.trace, PathBuf::from("/var/log/app/game.trace.log"));
        assert_eq!(paths.print, PathBuf::from("/var/log/app/game.print.log"));
        assert_eq!(
            paths.get(Level::Notice),
            Path::new("/var/log/app/game.notice.log")
        );
    }

    #[test]
    fn test_from_toml() {
        let paths = LogPaths::from_toml(
            r#"
            trace = "logs/trace.log"
            debug = "logs/debug.log"
            info = "logs/info.log"
            notice = "logs/notice.log"
            warn = "logs/warn.log"
            error = "logs/error.log"
            fatal = "logs/fatal.log"
            print = "logs/print.log"
            "#,
        )
        .unwrap();

        assert_eq!(paths.warn, PathBuf::from("logs/warn.log"));
        assert_eq!(
            paths.into_array()[Level::Fatal.index()],
            PathBuf::from("logs/fatal.log")
        );
    }

    #[test]
    fn test_from_toml_missing_key() {
        let result = LogPaths::from_toml(r#"trace = "trace.log""#);

        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
