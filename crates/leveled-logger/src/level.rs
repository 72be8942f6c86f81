//! Severity levels

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Severity of a log message. Each level is routed to its own file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Finest-grained diagnostics.
    Trace = 0,
    /// Debugging output.
    Debug = 1,
    /// Informational messages.
    Info = 2,
    /// Normal but significant events.
    Notice = 3,
    /// Warnings.
    Warn = 4,
    /// Errors.
    Error = 5,
    /// Unrecoverable errors. Writing at this level does not abort.
    Fatal = 6,
    /// Console-style output kept apart from the diagnostic levels.
    Print = 7,
}

impl Level {
    /// Number of levels.
    pub const COUNT: usize = 8;

    /// All levels in the order every batch operation visits them.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Print,
    ];

    /// Lowercase name, also used as the file infix by [`crate::LogPaths::in_dir`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Print => "print",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_index() {
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
        assert_eq!(Level::ALL.first(), Some(&Level::Trace));
        assert_eq!(Level::ALL.last(), Some(&Level::Print));
    }

    #[test]
    fn test_parse() {
        assert_eq!("notice".parse::<Level>().unwrap(), Level::Notice);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(Error::UnknownLevel(name)) if name == "verbose"
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::Fatal.to_string(), "fatal");
    }
}
