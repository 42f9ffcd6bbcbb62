//! The logging pipeline: configuration plus the active formatter and output
//!
//! A [`Pipeline`] owns everything the level methods need. Loggers hold an
//! `Arc` to one; [`global()`] returns the process-wide instance that
//! [`Logger::new`](super::Logger::new) binds to.
//!
//! The only mutators are [`configure`](Pipeline::configure),
//! [`set_log_levels`](Pipeline::set_log_levels),
//! [`set_formatter`](Pipeline::set_formatter) and
//! [`set_output`](Pipeline::set_output). Each emission takes one snapshot of
//! the formatter/output pair, so a concurrent swap never mixes the formatter
//! of one configuration with the output of another.

use super::{
    config::LoggerConfig,
    formatter::LogFormatter,
    log_entry::LogEntry,
    log_level::LogLevel,
    message::LogValue,
    output::{deliver, flush_contained, report, LogOutput},
};
use crate::formatters::TextFormatter;
use crate::outputs::ConsoleOutput;
use parking_lot::RwLock;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Arc<Pipeline>> = OnceLock::new();

/// The process-wide pipeline, created on first use with the text formatter,
/// console output and an environment-resolved config
pub fn global() -> &'static Arc<Pipeline> {
    GLOBAL.get_or_init(|| Arc::new(Pipeline::new()))
}

/// Formatter and output that are swapped together
struct Stage {
    formatter: Arc<dyn LogFormatter>,
    output: Arc<dyn LogOutput>,
}

pub struct Pipeline {
    config: OnceLock<RwLock<Arc<LoggerConfig>>>,
    resolver: fn() -> LoggerConfig,
    stage: RwLock<Arc<Stage>>,
}

impl Pipeline {
    /// Text formatter, console output, config resolved from the environment
    /// on first use
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            LoggerConfig::from_env,
            Arc::new(TextFormatter::new()),
            Arc::new(ConsoleOutput::new()),
        )
    }

    fn with_parts(
        resolver: fn() -> LoggerConfig,
        formatter: Arc<dyn LogFormatter>,
        output: Arc<dyn LogOutput>,
    ) -> Self {
        Self {
            config: OnceLock::new(),
            resolver,
            stage: RwLock::new(Arc::new(Stage { formatter, output })),
        }
    }

    fn config_lock(&self) -> &RwLock<Arc<LoggerConfig>> {
        self.config
            .get_or_init(|| RwLock::new(Arc::new((self.resolver)())))
    }

    /// Resolve the config if this is the first call; afterwards return the
    /// cached value unchanged
    pub fn initialize(&self) -> Arc<LoggerConfig> {
        self.config_lock().read().clone()
    }

    /// Current config snapshot, initializing if needed
    pub fn config(&self) -> Arc<LoggerConfig> {
        self.initialize()
    }

    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        self.config_lock().read().is_level_enabled(level)
    }

    /// Replace the whole config. Skips environment resolution when called
    /// before first use.
    pub fn configure(&self, config: LoggerConfig) {
        let mut pending = Some(config);
        let lock = self
            .config
            .get_or_init(|| RwLock::new(Arc::new(pending.take().unwrap_or_default())));
        if let Some(config) = pending {
            *lock.write() = Arc::new(config);
        }
    }

    /// Replace the enabled level set, leaving every other setting alone
    pub fn set_log_levels<I>(&self, levels: I)
    where
        I: IntoIterator<Item = LogLevel>,
    {
        let mut guard = self.config_lock().write();
        let mut next = LoggerConfig::clone(&guard);
        next.set_levels(levels);
        *guard = Arc::new(next);
    }

    pub fn set_formatter(&self, formatter: Arc<dyn LogFormatter>) {
        let mut stage = self.stage.write();
        *stage = Arc::new(Stage {
            formatter,
            output: Arc::clone(&stage.output),
        });
    }

    pub fn set_output(&self, output: Arc<dyn LogOutput>) {
        let mut stage = self.stage.write();
        *stage = Arc::new(Stage {
            formatter: Arc::clone(&stage.formatter),
            output,
        });
    }

    pub fn formatter(&self) -> Arc<dyn LogFormatter> {
        self.stage.read().formatter.clone()
    }

    pub fn output(&self) -> Arc<dyn LogOutput> {
        self.stage.read().output.clone()
    }

    /// Flush the active output. Failures are reported, not returned.
    pub fn flush(&self) -> bool {
        let output = self.output();
        flush_contained(output.as_ref())
    }

    /// Check the level, then build, format and write one entry.
    ///
    /// Nothing is constructed for a disabled level. Nothing escapes either:
    /// formatter panics degrade to the bare message, output failures are
    /// reported by the delivery boundary.
    pub fn emit<M, P>(
        &self,
        level: LogLevel,
        context: Option<&str>,
        message: M,
        params: P,
        trace: Option<LogValue>,
    ) where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        let config = self.config();
        if !config.is_level_enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, message)
            .with_context(context)
            .with_params(params.into_iter().collect())
            .with_trace(trace);

        let stage = self.stage.read().clone();
        let rendered = match catch_unwind(AssertUnwindSafe(|| {
            stage.formatter.format_message(&entry, &config)
        })) {
            Ok(rendered) => rendered,
            Err(_) => {
                report(&format!(
                    "[LOGGER ERROR] Formatter '{}' panicked; writing raw message",
                    stage.formatter.name()
                ));
                entry.message().to_message()
            }
        };

        deliver(stage.output.as_ref(), &rendered, level);
    }

    pub fn log<M, P>(&self, context: Option<&str>, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Log, context, message, params, None);
    }

    /// Error entries carry an optional trace instead of extra parameters
    pub fn error<M>(&self, context: Option<&str>, message: M, trace: Option<LogValue>)
    where
        M: Into<LogValue>,
    {
        self.emit(LogLevel::Error, context, message, [], trace);
    }

    pub fn warn<M, P>(&self, context: Option<&str>, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Warn, context, message, params, None);
    }

    pub fn debug<M, P>(&self, context: Option<&str>, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Debug, context, message, params, None);
    }

    pub fn verbose<M, P>(&self, context: Option<&str>, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Verbose, context, message, params, None);
    }

    pub fn info<M, P>(&self, context: Option<&str>, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Info, context, message, params, None);
    }

    pub fn success<M, P>(&self, context: Option<&str>, message: M, params: P)
    where
        M: Into<LogValue>,
        P: IntoIterator<Item = LogValue>,
    {
        self.emit(LogLevel::Success, context, message, params, None);
    }

    /// Create a builder for Pipeline
    ///
    /// # Example
    /// ```
    /// use log_pipeline::prelude::*;
    ///
    /// let pipeline = Pipeline::builder()
    ///     .config(LoggerConfig::default())
    ///     .formatter(JsonFormatter::new())
    ///     .output(ConsoleOutput::new())
    ///     .build();
    /// pipeline.info(Some("Main"), "ready", []);
    /// ```
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a Pipeline with a fluent API
pub struct PipelineBuilder {
    config: Option<LoggerConfig>,
    formatter: Arc<dyn LogFormatter>,
    output: Arc<dyn LogOutput>,
}

impl PipelineBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: None,
            formatter: Arc::new(TextFormatter::new()),
            output: Arc::new(ConsoleOutput::new()),
        }
    }

    /// Use this config instead of resolving one from the environment
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: LogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output<O: LogOutput + 'static>(mut self, output: O) -> Self {
        self.output = Arc::new(output);
        self
    }

    /// Use a shared output, e.g. a [`MultiOutput`](crate::outputs::MultiOutput)
    /// whose members change at runtime
    #[must_use = "builder methods return a new value"]
    pub fn shared_output(mut self, output: Arc<dyn LogOutput>) -> Self {
        self.output = output;
        self
    }

    /// Build the Pipeline
    pub fn build(self) -> Pipeline {
        let pipeline = Pipeline::with_parts(LoggerConfig::from_env, self.formatter, self.output);
        if let Some(config) = self.config {
            pipeline.configure(config);
        }
        pipeline
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use crate::formatters::JsonFormatter;
    use parking_lot::Mutex;

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

    fn pipeline_with(levels: &[LogLevel]) -> (Pipeline, Arc<Capture>) {
        let capture = Arc::new(Capture::default());
        let pipeline = Pipeline::builder()
            .config(LoggerConfig {
                levels: levels.to_vec(),
                ..LoggerConfig::default()
            })
            .shared_output(capture.clone())
            .build();
        (pipeline, capture)
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let pipeline = Pipeline::with_parts(
            || LoggerConfig {
                max_context_length: 3,
                ..LoggerConfig::default()
            },
            Arc::new(TextFormatter::new()),
            Arc::new(Capture::default()),
        );
        let first = pipeline.initialize();
        let second = pipeline.initialize();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.max_context_length, 3);
    }

    #[test]
    fn test_configure_skips_resolution() {
        let pipeline = Pipeline::with_parts(
            || panic!("environment must not be consulted"),
            Arc::new(TextFormatter::new()),
            Arc::new(Capture::default()),
        );
        pipeline.configure(LoggerConfig::default());
        assert!(pipeline.is_level_enabled(LogLevel::Verbose));
    }

    #[test]
    fn test_set_log_levels_keeps_other_fields() {
        let (pipeline, _) = pipeline_with(&LogLevel::ALL);
        pipeline.configure(LoggerConfig {
            max_context_length: 9,
            ..LoggerConfig::default()
        });
        pipeline.set_log_levels([LogLevel::Error, LogLevel::Error]);

        let config = pipeline.config();
        assert_eq!(config.levels, vec![LogLevel::Error]);
        assert_eq!(config.max_context_length, 9);
    }

    #[test]
    fn test_disabled_level_writes_nothing() {
        let (pipeline, capture) = pipeline_with(&[LogLevel::Error]);
        pipeline.info(Some("Ctx"), "hidden", []);
        pipeline.debug(None, "hidden", [LogValue::from(1)]);
        assert!(capture.lines.lock().is_empty());

        pipeline.error(Some("Ctx"), "shown", None);
        assert_eq!(capture.lines.lock().len(), 1);
    }

    #[test]
    fn test_formatter_swap_applies_to_next_emission() {
        let (pipeline, capture) = pipeline_with(&LogLevel::ALL);
        pipeline.info(Some("Ctx"), "as text", []);
        pipeline.set_formatter(Arc::new(JsonFormatter::new()));
        pipeline.info(Some("Ctx"), "as json", []);

        let lines = capture.lines.lock();
        assert!(lines[0].0.starts_with('['));
        let parsed: serde_json::Value = serde_json::from_str(&lines[1].0).unwrap();
        assert_eq!(parsed["message"], "as json");
        assert_eq!(pipeline.formatter().name(), "json");
    }

    #[test]
    fn test_panicking_formatter_degrades_to_message() {
        struct Broken;

        impl LogFormatter for Broken {
            fn format_message(&self, _entry: &LogEntry, _config: &LoggerConfig) -> String {
                panic!("formatter bug");
            }

            fn name(&self) -> &str {
                "broken"
            }
        }

        let (pipeline, capture) = pipeline_with(&LogLevel::ALL);
        pipeline.set_formatter(Arc::new(Broken));
        pipeline.warn(None, "raw text", []);

        assert_eq!(capture.lines.lock()[0].0, "raw text");
    }
}
