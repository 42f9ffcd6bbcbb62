//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. A message followed
//! by `;` and a list of values passes those values as optional parameters
//! instead.
//!
//! # Examples
//!
//! ```
//! use log_pipeline::prelude::*;
//! use log_pipeline::{info, warn};
//!
//! let logger = Logger::new("Server");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With optional parameters, rendered after the message
//! warn!(logger, "slow request"; "/api/orders", 1250);
//! ```

/// Log a message at an explicit level.
///
/// Arguments are only evaluated when `level` is enabled.
///
/// # Examples
///
/// ```
/// # use log_pipeline::prelude::*;
/// # let logger = Logger::new("Example");
/// use log_pipeline::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Log, "Status code: {}", 200);
/// log!(logger, LogLevel::Debug, "cache stats"; 12, 30);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr; $($param:expr),+ $(,)?) => {{
        let logger = &$logger;
        let level: $crate::LogLevel = $level;
        if logger.is_level_enabled(level) {
            logger.emit(level, $msg, [$($crate::LogValue::from($param)),+])
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level: $crate::LogLevel = $level;
        if logger.is_level_enabled(level) {
            logger.emit(level, format!($($arg)+), [])
        }
    }};
}

/// Log an error-level message without a trace.
///
/// Use [`Logger::error`](crate::Logger::error) directly to attach one.
///
/// ```
/// # use log_pipeline::prelude::*;
/// # let logger = Logger::new("Example");
/// use log_pipeline::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Verbose, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Success, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, LogOutput, Logger, LoggerConfig, Pipeline, Result};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Capture {
        lines: Mutex<Vec<(String, LogLevel)>>,
    }

    impl LogOutput for Capture {
        fn write(&self, message: &str, level: LogLevel) -> Result<()> {
            self.lines.lock().push((message.to_string(), level));
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    fn logger() -> (Logger, Arc<Capture>) {
        let capture = Arc::new(Capture::default());
        let pipeline = Pipeline::builder()
            .config(LoggerConfig::default())
            .shared_output(capture.clone())
            .build();
        (Logger::with_pipeline("Macros", Arc::new(pipeline)), capture)
    }

    #[test]
    fn test_log_macro() {
        let (logger, capture) = logger();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Log, "Formatted: {}", 42);

        let lines = capture.lines.lock();
        assert!(lines[0].0.ends_with("Test message"));
        assert!(lines[1].0.ends_with("Formatted: 42"));
        assert_eq!(lines[1].1, LogLevel::Log);
    }

    #[test]
    fn test_params_form() {
        let (logger, capture) = logger();
        warn!(logger, "slow request"; "/api/orders", 1250);
        debug!(logger, String::from("owned"); true,);

        let lines = capture.lines.lock();
        assert!(lines[0].0.ends_with("slow request /api/orders 1250"));
        assert!(lines[1].0.ends_with("owned true"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, capture) = logger();
        error!(logger, "Code: {}", 500);
        verbose!(logger, "Verbose message");
        info!(logger, "Items: {}", 100);
        success!(logger, "Done");

        let levels: Vec<LogLevel> = capture.lines.lock().iter().map(|(_, l)| *l).collect();
        assert_eq!(
            levels,
            vec![LogLevel::Error, LogLevel::Verbose, LogLevel::Info, LogLevel::Success]
        );
    }

    struct Costly<'a>(&'a AtomicUsize);

    impl std::fmt::Display for Costly<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            self.0.fetch_add(1, Ordering::Relaxed);
            f.write_str("costly")
        }
    }

    #[test]
    fn test_muted_level_skips_argument_work() {
        let (logger, capture) = logger();
        logger.pipeline().set_log_levels([LogLevel::Error]);
        let calls = AtomicUsize::new(0);

        debug!(logger, "value {}", Costly(&calls));
        info!(logger, "value"; Costly(&calls).to_string());
        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert!(capture.lines.lock().is_empty());

        error!(logger, "value {}", Costly(&calls));
        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert!(capture.lines.lock()[0].0.ends_with("value costly"));
    }
}
