//! Emit-time value providers: timestamps and thread identity
//!
//! Providers are plain `Fn() -> Option<String>` values; anything matching
//! that shape can be registered with `add_dynamic_context`. This module
//! ships the ones most configurations want.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options for [`timestamp`] providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => {
                datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
            }
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// Build a timestamp provider for `add_dynamic_context`.
///
/// # Example
///
/// ```
/// use kvlog::{providers, Config, Level, TimestampFormat};
///
/// let config = Config::new(Level::Debug);
/// config.add_dynamic_context("ts", providers::timestamp(TimestampFormat::Iso8601Micros));
/// ```
pub fn timestamp(format: TimestampFormat) -> impl Fn() -> Option<String> + Send + Sync + 'static {
    move || Some(format.format(&Utc::now()))
}

/// Provider reporting the current thread's name, if it has one.
pub fn thread_name() -> Option<String> {
    std::thread::current().name().map(String::from)
}
