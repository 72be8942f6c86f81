//! Side channel for reporting failures to open a log file

use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Receives a report when a log file fails to open.
pub trait DiagnosticSink: Send {
    /// Called once per failed open, before the error is returned.
    fn open_failed(&mut self, path: &Path, error: &io::Error);
}

/// Writes open failures to standard error as two lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn open_failed(&mut self, path: &Path, error: &io::Error) {
        let mut stderr = io::stderr().lock();
        // Nothing sensible to do if stderr itself is gone.
        let _ = write_report(&mut stderr, path, error);
    }
}

/// Collects open-failure reports in memory.
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    /// The report text, in the same two-line format as [`StderrSink`]
    pub output: Vec<u8>,
}

impl BufferSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { output: Vec::new() }
    }

    /// Report text as a lossy UTF-8 string.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl DiagnosticSink for BufferSink {
    fn open_failed(&mut self, path: &Path, error: &io::Error) {
        let _ = write_report(&mut self.output, path, error);
    }
}

/// Lets the caller keep a handle on a sink after handing it to a logger.
impl<S: DiagnosticSink> DiagnosticSink for Arc<Mutex<S>> {
    fn open_failed(&mut self, path: &Path, error: &io::Error) {
        if let Ok(mut sink) = self.lock() {
            sink.open_failed(path, error);
        }
    }
}

fn write_report(out: &mut impl Write, path: &Path, error: &io::Error) -> io::Result<()> {
    writeln!(out, "filePath=[{}]", path.display())?;
    writeln!(out, "err=[{error}]")
}
