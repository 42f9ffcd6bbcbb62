//! Timestamp formatting utilities
//!
//! Entries carry their timestamp as text captured at construction time:
//! local time, space-separated date and time, millisecond precision and no
//! zone marker, e.g. `2025-01-08 10:30:45.123`.

use chrono::{DateTime, Local, TimeZone};

/// strftime pattern for entry and file-line timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format any chrono datetime with [`TIMESTAMP_FORMAT`]
#[must_use]
pub fn format_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time formatted with [`TIMESTAMP_FORMAT`]
#[must_use]
pub fn now() -> String {
    format_timestamp(&Local::now())
}
