//! Logger façade bound to one context name

use super::{
    log_level::LogLevel,
    message::LogValue,
    pipeline::{global, Pipeline},
};
use std::sync::Arc;

/// A context name plus the pipeline it emits through.
///
/// Loggers are cheap to clone and hold no other state; configuration,
/// formatter and output all live in the shared [`Pipeline`], so swapping
/// them there affects every logger at once.
///
/// # Example
///
/// ```
/// use log_pipeline::prelude::*;
///
/// let logger = Logger::new("OrderService");
/// logger.info("order placed", [LogValue::from(1042)]);
/// logger.error("payment declined", Some(LogValue::from("card expired")));
/// ```
#[derive(Clone)]
pub struct Logger {
    context: String,
    pipeline: Arc<Pipeline>,
}

impl Logger {
    /// Logger on the process-wide pipeline
    #[must_use]
    pub fn new(context: impl Into<String>) -> Self {
        Self::with_pipeline(context, Arc::clone(global()))
    }

    #[must_use]
    pub fn with_pipeline(context: impl Into<String>, pipeline: Arc<Pipeline>) -> Self {
        Self {
            context: context.into(),
            pipeline,
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn pipeline(&self) -> &Arc<Pipeline> {
        &self.pipeline
    }

    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        self.pipeline.is_level_enabled(level)
    }

    /// Emit at an arbitrary level without a trace. Used by the logging macros.
    pub fn emit<M, P>(&self, level: LogLevel, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.pipeline
            .emit(level, Some(self.context.as_str()), message, params, None);
    }

    #[inline]
    pub fn log<M, P>(&self, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Log, message, params);
    }

    #[inline]
    pub fn error<M>(&self, message: M, trace: Option<LogValue>)
    where
        M: Into<LogValue>,
    {
        self.pipeline.error(Some(self.context.as_str()), message, trace);
    }

    /// Error under a different context than the one this logger is bound to
    #[inline]
    pub fn error_in<M>(&self, context: &str, message: M, trace: Option<LogValue>)
    where
        M: Into<LogValue>,
    {
        self.pipeline.error(Some(context), message, trace);
    }

    #[inline]
    pub fn warn<M, P>(&self, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Warn, message, params);
    }

    #[inline]
    pub fn debug<M, P>(&self, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Debug, message, params);
    }

    #[inline]
    pub fn verbose<M, P>(&self, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Verbose, message, params);
    }

    #[inline]
    pub fn info<M, P>(&self, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Info, message, params);
    }

    #[inline]
    pub fn success<M, P>(&self, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Success, message, params);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogOutput, LoggerConfig, Result};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Capture {
        lines: Mutex<Vec<String>>,
    }

    impl LogOutput for Capture {
        fn write(&self, message: &str, _level: LogLevel) -> Result<()> {
            self.lines.lock().push(message.to_string());
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    fn logger(context: &str) -> (Logger, Arc<Capture>) {
        let capture = Arc::new(Capture::default());
        let pipeline = Pipeline::builder()
            .config(LoggerConfig::default())
            .shared_output(capture.clone())
            .build();
        (Logger::with_pipeline(context, Arc::new(pipeline)), capture)
    }

    #[test]
    fn test_context_is_bound() {
        let (logger, capture) = logger("Billing");
        logger.success("invoice sent", []);

        let lines = capture.lines.lock();
        assert!(lines[0].contains("[Billing"));
        assert!(lines[0].contains("[SUCCESS]"));
        assert!(lines[0].ends_with("invoice sent"));
    }

    #[test]
    fn test_error_in_overrides_context() {
        let (logger, capture) = logger("Billing");
        logger.error_in("Gateway", "timeout", None);

        let lines = capture.lines.lock();
        assert!(lines[0].contains("[Gateway"));
        assert!(!lines[0].contains("Billing"));
    }

    #[test]
    fn test_clones_share_pipeline() {
        let (logger, capture) = logger("A");
        let other = Logger::with_pipeline("B", Arc::clone(logger.pipeline()));

        logger.pipeline().set_log_levels([LogLevel::Warn]);
        logger.info("muted", []);
        other.info("muted", []);
        other.warn("heard", []);

        assert_eq!(capture.lines.lock().len(), 1);
        assert!(!other.is_level_enabled(LogLevel::Info));
    }

    #[test]
    fn test_debug_impl() {
        let (logger, _) = logger("Dbg");
        assert!(format!("{:?}", logger).contains("Dbg"));
    }
}
