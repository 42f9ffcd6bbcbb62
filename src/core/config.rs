//! Logger configuration resolved from the environment
//!
//! | Variable | Effect |
//! |---|---|
//! | `LOG_LEVELS` | comma-separated level names to enable |
//! | `APP_ENV` | `production` selects the reduced default level set |
//! | `NO_COLOR` | disables colors |
//! | `FORCE_COLOR` | enables colors even when stdout is not a terminal |
//! | `LOG_ORDER` | `context-first` puts the context column before the level |
//! | `LOG_CONTEXT_WIDTH`, `LOG_LEVEL_WIDTH` | column padding widths |
//!
//! Resolution never fails: anything malformed falls back to defaults.

use super::log_level::LogLevel;
use std::io::IsTerminal;

pub const ENV_LOG_LEVELS: &str = "LOG_LEVELS";
pub const ENV_APP_ENV: &str = "APP_ENV";
pub const ENV_NO_COLOR: &str = "NO_COLOR";
pub const ENV_FORCE_COLOR: &str = "FORCE_COLOR";
pub const ENV_LOG_ORDER: &str = "LOG_ORDER";
pub const ENV_CONTEXT_WIDTH: &str = "LOG_CONTEXT_WIDTH";
pub const ENV_LEVEL_WIDTH: &str = "LOG_LEVEL_WIDTH";

pub const DEFAULT_MAX_CONTEXT_LENGTH: usize = 20;
pub const DEFAULT_MAX_LEVEL_LENGTH: usize = 7;

/// Column order for text output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogOrder {
    #[default]
    LevelFirst,
    ContextFirst,
}

impl LogOrder {
    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "context-first" => LogOrder::ContextFirst,
            _ => LogOrder::LevelFirst,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Enabled levels, deduplicated, in first-seen order
    pub levels: Vec<LogLevel>,
    pub use_colors: bool,
    pub max_context_length: usize,
    pub max_level_length: usize,
    pub log_order: LogOrder,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            levels: LogLevel::ALL.to_vec(),
            use_colors: false,
            max_context_length: DEFAULT_MAX_CONTEXT_LENGTH,
            max_level_length: DEFAULT_MAX_LEVEL_LENGTH,
            log_order: LogOrder::LevelFirst,
        }
    }
}

impl LoggerConfig {
    /// Resolve from the process environment, detecting a terminal on stdout
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    /// Resolve from an arbitrary variable lookup
    pub fn resolve<F>(lookup: F, stdout_is_terminal: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let levels = lookup(ENV_LOG_LEVELS)
            .map(|raw| parse_level_list(&raw))
            .filter(|levels| !levels.is_empty())
            .unwrap_or_else(|| {
                if is_production(lookup(ENV_APP_ENV).as_deref()) {
                    LogLevel::PRODUCTION.to_vec()
                } else {
                    LogLevel::ALL.to_vec()
                }
            });

        let use_colors = if flag_set(lookup(ENV_NO_COLOR).as_deref()) {
            false
        } else {
            force_color(lookup(ENV_FORCE_COLOR).as_deref()) || stdout_is_terminal
        };

        Self {
            levels,
            use_colors,
            max_context_length: parse_width(lookup(ENV_CONTEXT_WIDTH).as_deref())
                .unwrap_or(DEFAULT_MAX_CONTEXT_LENGTH),
            max_level_length: parse_width(lookup(ENV_LEVEL_WIDTH).as_deref())
                .unwrap_or(DEFAULT_MAX_LEVEL_LENGTH),
            log_order: LogOrder::parse(lookup(ENV_LOG_ORDER).as_deref()),
        }
    }

    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        self.levels.contains(&level)
    }

    /// Replace the enabled set, dropping duplicates
    pub fn set_levels<I>(&mut self, levels: I)
    where
        I: IntoIterator<Item = LogLevel>,
    {
        self.levels = dedup(levels);
    }
}

/// Parse `"debug, INFO,,bogus,info"` into `[Debug, Info]`
pub fn parse_level_list(raw: &str) -> Vec<LogLevel> {
    dedup(raw.split(',').filter_map(|part| part.parse::<LogLevel>().ok()))
}

fn dedup<I>(levels: I) -> Vec<LogLevel>
where
    I: IntoIterator<Item = LogLevel>,
{
    let mut out = Vec::with_capacity(LogLevel::ALL.len());
    for level in levels {
        if !out.contains(&level) {
            out.push(level);
        }
    }
    out
}

fn is_production(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("production") | Some("prod")
    )
}

fn flag_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn force_color(value: Option<&str>) -> bool {
    match value.map(|v| v.trim().to_lowercase()) {
        Some(v) => !v.is_empty() && v != "0" && v != "false",
        None => false,
    }
}

fn parse_width(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
}
