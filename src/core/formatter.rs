//! Formatter trait for rendering entries into text

use super::{config::LoggerConfig, log_entry::LogEntry};

/// Turns an entry into the string handed to the active output.
///
/// Implementations must be pure: no I/O, and the result depends only on the
/// entry and the config snapshot passed in.
pub trait LogFormatter: Send + Sync {
    fn format_message(&self, entry: &LogEntry, config: &LoggerConfig) -> String;
    fn name(&self) -> &str;
}
