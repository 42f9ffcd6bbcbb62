//! Human-readable text formatter
//!
//! Renders `[timestamp] [LEVEL  ] [Context             ] message params...`,
//! or with the context column first when configured. Entries without a
//! context have no context column.

use crate::core::color::ColorPalette;
use crate::core::{LogEntry, LogFormatter, LogOrder, LoggerConfig};

#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Pad or truncate to exactly `width` characters
    fn fit(text: &str, width: usize) -> String {
        let truncated: String = text.chars().take(width).collect();
        format!("{:<width$}", truncated, width = width)
    }

    fn level_column(entry: &LogEntry, config: &LoggerConfig) -> String {
        let level = entry.level();
        let padded = Self::fit(level.label(), config.max_level_length);
        if config.use_colors {
            ColorPalette::paint(&padded, level.color_key())
        } else {
            padded
        }
    }

    fn context_column(context: &str, config: &LoggerConfig) -> String {
        let fitted = Self::fit(context, config.max_context_length);
        if config.use_colors {
            ColorPalette::paint(&fitted, ColorPalette::context_color(context))
        } else {
            fitted
        }
    }
}

impl LogFormatter for TextFormatter {
    fn format_message(&self, entry: &LogEntry, config: &LoggerConfig) -> String {
        let timestamp = if config.use_colors {
            ColorPalette::dim(entry.timestamp())
        } else {
            entry.timestamp().to_string()
        };
        let level = Self::level_column(entry, config);

        let mut line = match entry.context().map(|c| Self::context_column(c, config)) {
            Some(context) => match config.log_order {
                LogOrder::LevelFirst => format!("[{}] [{}] [{}] ", timestamp, level, context),
                LogOrder::ContextFirst => format!("[{}] [{}] [{}] ", timestamp, context, level),
            },
            None => format!("[{}] [{}] ", timestamp, level),
        };

        line.push_str(&entry.message().to_message());
        for param in entry.optional_params() {
            line.push(' ');
            line.push_str(&param.to_message());
        }

        if let Some(trace) = entry.trace() {
            line.push('\n');
            line.push_str(&trace.to_detailed_message());
        }

        line
    }

    fn name(&self) -> &str {
        "text"
    }
}
