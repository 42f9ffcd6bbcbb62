//! Log entry structure

use super::log_level::LogLevel;
use super::message::LogValue;
use super::timestamp;

/// One emission, built after the level check passes and discarded once
/// written. Fields are only readable; the `with_*` builders consume the entry
/// before it is handed to a formatter.
#[derive(Debug, Clone)]
pub struct LogEntry {
    level: LogLevel,
    message: LogValue,
    context: Option<String>,
    timestamp: String,
    optional_params: Vec<LogValue>,
    trace: Option<LogValue>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<LogValue>) -> Self {
        Self {
            level,
            message: message.into(),
            context: None,
            timestamp: timestamp::now(),
            optional_params: Vec::new(),
            trace: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: Option<&str>) -> Self {
        self.context = context.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: Vec<LogValue>) -> Self {
        self.optional_params = params;
        self
    }

    /// Attach a trace. Only error entries carry one; on other levels this is a
    /// no-op.
    #[must_use]
    pub fn with_trace(mut self, trace: Option<LogValue>) -> Self {
        if self.level == LogLevel::Error {
            self.trace = trace;
        }
        self
    }

    /// Override the captured timestamp
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &LogValue {
        &self.message
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn optional_params(&self) -> &[LogValue] {
        &self.optional_params
    }

    pub fn trace(&self) -> Option<&LogValue> {
        self.trace.as_ref()
    }
}
