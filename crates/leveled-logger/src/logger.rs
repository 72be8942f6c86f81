//! The leveled file logger

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, error};

use crate::channel::LogChannel;
use crate::diagnostics::{DiagnosticSink, StderrSink};
use crate::{Error, Level, LogPaths, Result};

/// `chrono` layout of the prefix on every record, e.g. `2024-01-01 13:05:09`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes each severity to its own append-only file through a buffer.
///
/// Nothing is written until [`open_all`](Self::open_all) succeeds, and
/// nothing is durable until [`flush_all`](Self::flush_all) is called. The
/// logger never flushes on its own apart from the best-effort flush when it
/// is dropped.
///
/// All mutating methods take `&mut self`. To share one logger across threads,
/// wrap it in a mutex.
pub struct LeveledFileLogger {
    channels: [LogChannel; Level::COUNT],
    diagnostics: Box<dyn DiagnosticSink>,
}

impl LeveledFileLogger {
    /// Creates a logger from eight paths in level order. Performs no I/O.
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
        Self::from_paths(LogPaths::new(
            trace, debug, info, notice, warn, error, fatal, print,
        ))
    }

    /// Creates a logger from a [`LogPaths`]. Performs no I/O.
    #[must_use]
    pub fn from_paths(paths: LogPaths) -> Self {
        let mut paths = paths.into_array();
        let channels = std::array::from_fn(|i| {
            LogChannel::new(Level::ALL[i], std::mem::take(&mut paths[i]))
        });

        Self {
            channels,
            diagnostics: Box::new(StderrSink),
        }
    }

    /// Replaces the sink that receives open-failure reports (stderr by default).
    #[must_use]
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    /// Path configured for `level`.
    #[must_use]
    pub fn path(&self, level: Level) -> &Path {
        self.channel(level).path()
    }

    /// Whether the file for `level` is currently open.
    #[must_use]
    pub const fn is_open(&self, level: Level) -> bool {
        self.channels[level.index()].is_open()
    }

    /// Opens every log file in level order, creating missing files and
    /// appending to existing ones.
    ///
    /// # Errors
    ///
    /// Stops at the first file that fails to open, reports it to the
    /// diagnostic sink, and returns [`Error::Open`]. Files opened before the
    /// failure stay open; files after it are not touched.
    pub fn open_all(&mut self) -> Result<()> {
        for channel in &mut self.channels {
            if let Err(source) = channel.open() {
                let level = channel.level();
                self.diagnostics.open_failed(channel.path(), &source);
                error!(%level, path = %channel.path().display(), error = %source, "failed to open log file");

                return Err(Error::Open {
                    level,
                    path: channel.path().to_path_buf(),
                    source,
                });
            }
        }

        Ok(())
    }

    /// Writes every buffer to its file in level order.
    ///
    /// Unopened channels are skipped. Flushing an empty buffer is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Flush`] for the first channel that fails. Channels
    /// after it are not flushed and keep their buffered bytes.
    pub fn flush_all(&mut self) -> Result<()> {
        for channel in &mut self.channels {
            channel.flush()?;
        }

        Ok(())
    }

    /// Like [`flush_all`](Self::flush_all) but attempts every channel even
    /// after a failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PartialFlush`] listing each channel that failed.
    pub fn flush_every(&mut self) -> Result<()> {
        let failures: Vec<_> = self
            .channels
            .iter_mut()
            .filter_map(|channel| match channel.flush() {
                Err(Error::Flush { level, source, .. }) => Some((level, source)),
                _ => None,
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::PartialFlush(failures))
        }
    }

    /// Flushes every channel, then closes every file in level order.
    ///
    /// Errors from closing individual files are ignored; close is
    /// best-effort cleanup.
    ///
    /// # Errors
    ///
    /// Returns the [`flush_all`](Self::flush_all) error, in which case no file
    /// is closed.
    pub fn close_all(&mut self) -> Result<()> {
        self.flush_all()?;

        for channel in &mut self.channels {
            channel.close();
        }

        Ok(())
    }

    /// Deletes the configured files left over from an earlier run.
    ///
    /// A file is only deleted if its basename ends with `.log` or contains
    /// `.log.`, so a misconfigured path cannot remove unrelated data. Every
    /// deletion error, including a missing file, is ignored.
    pub fn remove_all_old_logs(&self) {
        for channel in &self.channels {
            channel.remove_old();
        }
        debug!("removed old log files");
    }

    /// Appends `[<timestamp>] <message>` to the buffer for `level`.
    ///
    /// No newline is added.
    pub fn write(&mut self, level: Level, args: fmt::Arguments<'_>) {
        let message = fmt::format(args);
        self.write_message(level, &message);
    }

    /// Writes to the trace log.
    pub fn trace(&mut self, args: fmt::Arguments<'_>) {
        self.write(Level::Trace, args);
    }

    /// Writes to the debug log.
    pub fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.write(Level::Debug, args);
    }

    /// Writes to the info log.
    pub fn info(&mut self, args: fmt::Arguments<'_>) {
        self.write(Level::Info, args);
    }

    /// Writes to the notice log.
    pub fn notice(&mut self, args: fmt::Arguments<'_>) {
        self.write(Level::Notice, args);
    }

    /// Writes to the warn log.
    pub fn warn(&mut self, args: fmt::Arguments<'_>) {
        self.write(Level::Warn, args);
    }

    /// Writes to the error log.
    pub fn error(&mut self, args: fmt::Arguments<'_>) {
        self.write(Level::Error, args);
    }

    /// Writes to the fatal log and returns the message without its timestamp.
    ///
    /// Does not terminate the process; the returned text is meant for the
    /// caller's own exit or panic message.
    pub fn fatal(&mut self, args: fmt::Arguments<'_>) -> String {
        let message = fmt::format(args);
        self.write_message(Level::Fatal, &message);
        message
    }

    /// Writes to the print log.
    pub fn print(&mut self, args: fmt::Arguments<'_>) {
        self.write(Level::Print, args);
    }

    fn write_message(&mut self, level: Level, message: &str) {
        let record = format!("[{}] {message}", Local::now().format(TIMESTAMP_FORMAT));
        self.channels[level.index()].append(record.as_bytes());
    }

    const fn channel(&self, level: Level) -> &LogChannel {
        &self.channels[level.index()]
    }
}

impl fmt::Debug for LeveledFileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledFileLogger")
            .field("channels", &self.channels)
            .finish_non_exhaustive()
    }
}
