//! Log level definitions
//!
//! Levels are categories, not severities: there is no ordering between them
//! and enablement is decided by set membership in [`LoggerConfig`].
//!
//! [`LoggerConfig`]: super::config::LoggerConfig

use super::color::ColorKey;
use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Log,
    Error,
    Warn,
    Debug,
    Verbose,
    Info,
    Success,
}

impl LogLevel {
    /// Every level, in declaration order.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Log,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Debug,
        LogLevel::Verbose,
        LogLevel::Info,
        LogLevel::Success,
    ];

    /// Levels enabled by default in production.
    pub const PRODUCTION: [LogLevel; 4] =
        [LogLevel::Log, LogLevel::Warn, LogLevel::Error, LogLevel::Info];

    /// Lower-case name, as used in configuration and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Log => "log",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
            LogLevel::Info => "info",
            LogLevel::Success => "success",
        }
    }

    /// Upper-case column label for text output
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Log => "LOG",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
        }
    }

    pub fn color_key(&self) -> ColorKey {
        match self {
            LogLevel::Log => ColorKey::Green,
            LogLevel::Error => ColorKey::Red,
            LogLevel::Warn => ColorKey::Yellow,
            LogLevel::Debug => ColorKey::Magenta,
            LogLevel::Verbose => ColorKey::Cyan,
            LogLevel::Info => ColorKey::Blue,
            LogLevel::Success => ColorKey::BrightGreen,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(LogLevel::Log),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "debug" => Ok(LogLevel::Debug),
            "verbose" => Ok(LogLevel::Verbose),
            "info" => Ok(LogLevel::Info),
            "success" => Ok(LogLevel::Success),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
