//! JSON formatter for machine consumption
//!
//! One object per entry (JSONL when written line by line), compatible with
//! log aggregation tools like ELK, Loki, etc.

use crate::core::{LogEntry, LogFormatter, LogLevel, LoggerConfig, Result};
use serde::Serialize;

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: &'a str,
    level: LogLevel,
    context: Option<&'a str>,
    message: String,
    optional_params: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Multi-line, indented output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}

impl LogFormatter for JsonFormatter {
    fn format_message(&self, entry: &LogEntry, _config: &LoggerConfig) -> String {
        let record = JsonRecord {
            timestamp: entry.timestamp(),
            level: entry.level(),
            context: entry.context(),
            message: entry.message().to_message(),
            optional_params: entry
                .optional_params()
                .iter()
                .map(|p| p.to_json_value())
                .collect(),
            trace: entry.trace().map(|t| t.to_json_value()),
        };

        self.render(&record).unwrap_or_else(|e| {
            serde_json::json!({
                "timestamp": entry.timestamp(),
                "level": entry.level(),
                "context": entry.context(),
                "message": format!("unserializable entry: {}", e),
            })
            .to_string()
        })
    }

    fn name(&self) -> &str {
        "json"
    }
}
