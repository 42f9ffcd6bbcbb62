//! Error types for the logging pipeline
//!
//! These never reach code that merely logs: outputs return them, and the
//! delivery boundary in [`output`](super::output) reports and swallows them.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// File output error with path
    #[error("File output error for '{path}': {message}")]
    FileOutputError {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File lock error
    #[error("Failed to acquire file lock on '{path}'")]
    FileLockError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }

    /// Create a file output error
    pub fn file_output(path: impl Into<String>, message: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOutputError {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file lock error
    pub fn file_lock(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileLockError {
            path: path.into(),
            source,
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("fatal");
        assert_eq!(err.to_string(), "Invalid log level: 'fatal'");

        let err = LoggerError::file_output(
            "/var/log/app.log",
            "append failed",
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "File output error for '/var/log/app.log': append failed"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = Error::new(ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("writing to stdout", "stream closed", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing to stdout"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
