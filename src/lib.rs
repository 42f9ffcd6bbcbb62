//! # Log Pipeline
//!
//! A synchronous logging pipeline with pluggable formatting and
//! multi-destination output.
//!
//! ## Features
//!
//! - **Context-bound loggers**: each [`Logger`] carries a subsystem name
//! - **Set-based level gating**: any subset of levels can be enabled, resolved
//!   from `LOG_LEVELS` / `APP_ENV` at first use
//! - **Pluggable formatters**: colorized text or JSON
//! - **Pluggable outputs**: console, append-only file, and fan-out with
//!   per-sink failure isolation
//! - **Never fails the caller**: sink and formatter faults are contained and
//!   reported as diagnostics
//!
//! ```
//! use log_pipeline::prelude::*;
//! use std::sync::Arc;
//!
//! let pipeline = Arc::new(Pipeline::builder().config(LoggerConfig::default()).build());
//! let logger = Logger::with_pipeline("Startup", Arc::clone(&pipeline));
//!
//! logger.info("listening", [LogValue::from(8080)]);
//! pipeline.set_log_levels([LogLevel::Error, LogLevel::Warn]);
//! logger.debug("not emitted", []);
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod outputs;

pub mod prelude {
    pub use crate::core::{
        global, LogEntry, LogFormatter, LogLevel, LogOrder, LogOutput, LogValue, Logger,
        LoggerConfig, LoggerError, Pipeline, PipelineBuilder, Result,
    };
    pub use crate::formatters::{JsonFormatter, TextFormatter};
    pub use crate::outputs::{ConsoleOutput, FileOutput, MultiOutput};
}

pub use crate::core::{
    global, ColorKey, ColorPalette, LogEntry, LogFormatter, LogLevel, LogOrder, LogOutput,
    LogValue, Logger, LoggerConfig, LoggerError, Pipeline, PipelineBuilder, Result,
};
pub use formatters::{JsonFormatter, TextFormatter};
pub use outputs::{ConsoleOutput, FileOutput, MultiOutput};
