//! Core logger types and traits

pub mod color;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod output;
pub mod pipeline;
pub mod timestamp;

pub use color::{ColorKey, ColorPalette};
pub use config::{LogOrder, LoggerConfig};
pub use error::{LoggerError, Result};
pub use formatter::LogFormatter;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use message::LogValue;
pub use output::LogOutput;
pub use pipeline::{global, Pipeline, PipelineBuilder};
