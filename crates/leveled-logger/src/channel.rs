//! A single severity's file and write buffer

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{Error, Level, Result};

/// Path, file handle and buffer for one level.
#[derive(Debug)]
pub(crate) struct LogChannel {
    level: Level,
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl LogChannel {
    pub(crate) const fn new(level: Level, path: PathBuf) -> Self {
        Self {
            level,
            path,
            writer: None,
        }
    }

    pub(crate) const fn level(&self) -> Level {
        self.level
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) const fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Opens the file in append-create mode. Reopening replaces the old handle.
    pub(crate) fn open(&mut self) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }

        let file = options.open(&self.path)?;
        self.writer = Some(BufWriter::new(file));

        debug!(level = %self.level, path = %self.path.display(), "opened log file");
        Ok(())
    }

    /// Appends `bytes` to the buffer. Dropped if the channel was never opened.
    pub(crate) fn append(&mut self, bytes: &[u8]) {
        let Some(writer) = self.writer.as_mut() else {
            warn!(level = %self.level, "write to unopened log channel dropped");
            return;
        };

        // A full buffer spills to disk here; failures surface on the next flush.
        if let Err(e) = writer.write_all(bytes) {
            warn!(level = %self.level, error = %e, "buffered log write failed");
        }
    }

    pub(crate) fn flush(&mut self) -> Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };

        writer.flush().map_err(|source| Error::Flush {
            level: self.level,
            path: self.path.clone(),
            source,
        })
    }

    /// Releases the file handle. Any error from the final drop is ignored.
    pub(crate) fn close(&mut self) {
        if let Some(writer) = self.writer.take() {
            drop(writer);
            debug!(level = %self.level, path = %self.path.display(), "closed log file");
        }
    }

    /// Deletes the file if its name looks like a log file. Errors are ignored.
    pub(crate) fn remove_old(&self) {
        if !is_log_file_name(&self.path) {
            debug!(path = %self.path.display(), "refusing to remove non-log file");
            return;
        }

        if let Err(e) = std::fs::remove_file(&self.path) {
            debug!(path = %self.path.display(), error = %e, "old log not removed");
        }
    }
}

/// True if the basename ends with `.log` or contains `.log.`.
pub(crate) fn is_log_file_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| name.ends_with(".log") || name.contains(".log."))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;
    use tracing_test::traced_test;

    #[test]
    fn test_log_file_names() {
        assert!(is_log_file_name(Path::new("app.log")));
        assert!(is_log_file_name(Path::new("/var/log/app.log")));
        assert!(is_log_file_name(Path::new("app.log.2024-01-01")));
        assert!(is_log_file_name(Path::new("logs/.log")));

        assert!(!is_log_file_name(Path::new("app.txt")));
        assert!(!is_log_file_name(Path::new("app.logs")));
        assert!(!is_log_file_name(Path::new("catalog")));
        assert!(!is_log_file_name(Path::new("app.log/data.txt")));
        assert!(!is_log_file_name(Path::new("/")));
    }

    #[test]
    #[traced_test]
    fn test_append_before_open_is_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.log");
        let mut channel = LogChannel::new(Level::Trace, path.clone());

        channel.append(b"lost\n");
        assert!(channel.flush().is_ok());
        assert!(!path.exists());
        assert!(logs_contain("write to unopened log channel dropped"));
    }

    #[test]
    #[traced_test]
    fn test_remove_old_refuses_other_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "keep").unwrap();

        LogChannel::new(Level::Warn, path.clone()).remove_old();

        assert!(path.exists());
        assert!(logs_contain("refusing to remove non-log file"));
    }

    #[test]
    fn test_remove_old_ignores_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.log");

        LogChannel::new(Level::Error, path.clone()).remove_old();

        assert!(!path.exists());
    }

    #[test]
    fn test_open_appends_to_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("info.log");
        std::fs::write(&path, "existing\n").unwrap();

        let mut channel = LogChannel::new(Level::Info, path.clone());
        channel.open().unwrap();
        channel.append(b"appended\n");
        channel.flush().unwrap();
        channel.close();

        assert!(!channel.is_open());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing\nappended\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_open_creates_with_requested_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("notice.log");
        let mut channel = LogChannel::new(Level::Notice, path.clone());
        channel.open().unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // Umask may clear bits but never adds execute.
        assert_eq!(mode & 0o111, 0);
        assert_ne!(mode & 0o600, 0);
    }
}
