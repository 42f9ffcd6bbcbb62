//! Console output implementation

use crate::core::{LogLevel, LogOutput, LoggerError, Result};
use parking_lot::Mutex;
use std::io::{self, Write};

enum Stream {
    Stdout,
    Stderr,
    Writer(Mutex<Box<dyn Write + Send>>),
}

impl Stream {
    fn write_line(&self, message: &str) -> io::Result<()> {
        match self {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", message),
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", message),
            Stream::Writer(writer) => writeln!(writer.lock(), "{}", message),
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
            Stream::Writer(writer) => writer.lock().flush(),
        }
    }
}

/// Writes `error` entries to stderr and everything else to stdout.
///
/// If the preferred stream rejects the write (closed pipe, detached
/// terminal) the line goes to the other stream instead.
pub struct ConsoleOutput {
    out: Stream,
    err: Stream,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        Self {
            out: Stream::Stdout,
            err: Stream::Stderr,
        }
    }

    /// Use custom writers in place of stdout and stderr
    ///
    /// # Example
    ///
    /// ```
    /// use log_pipeline::outputs::ConsoleOutput;
    ///
    /// let console = ConsoleOutput::with_writers(Vec::new(), std::io::sink());
    /// ```
    pub fn with_writers<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Stream::Writer(Mutex::new(Box::new(out))),
            err: Stream::Writer(Mutex::new(Box::new(err))),
        }
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl LogOutput for ConsoleOutput {
    fn write(&self, message: &str, level: LogLevel) -> Result<()> {
        let (preferred, fallback) = match level {
            LogLevel::Error => (&self.err, &self.out),
            _ => (&self.out, &self.err),
        };

        match preferred.write_line(message) {
            Ok(()) => Ok(()),
            Err(first) => fallback.write_line(message).map_err(|_| {
                LoggerError::io_operation("writing to console", "no stream accepted the line", first)
            }),
        }
    }

    fn flush(&self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
