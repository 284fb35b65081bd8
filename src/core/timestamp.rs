//! Timestamp formatting utilities
//!
//! Renders the `{timestamp}` placeholder. The default is local wall-clock
//! time as `YYYY-MM-DD HH:MM:SS`; other formats are available for hosts
//! that feed console output into aggregation tools.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Substituted for `{timestamp}` when the time cannot be rendered.
pub const TIMESTAMP_ERROR: &str = "[timestamp error]";

const LOCAL_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use console_log::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let rendered = TimestampFormat::default().format(&at).unwrap();
/// assert_eq!(rendered, "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local date and time: `2025-01-08 10:30:45`
    #[default]
    LocalDateTime,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime pattern
    ///
    /// # Examples
    ///
    /// ```
    /// use console_log::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// assert!(format.validate().is_ok());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Render the current local time.
    pub fn now(&self) -> Result<String> {
        self.format(&Local::now())
    }

    /// Render a datetime according to this format
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::LocalDateTime => render(datetime, LOCAL_DATE_TIME),
            TimestampFormat::Iso8601 => render(datetime, "%Y-%m-%dT%H:%M:%S%.3f%:z"),
            TimestampFormat::Rfc3339 => Ok(datetime.to_rfc3339()),
            TimestampFormat::Unix => Ok(datetime.timestamp().to_string()),
            TimestampFormat::UnixMillis => Ok(datetime.timestamp_millis().to_string()),
            TimestampFormat::Custom(pattern) => render(datetime, pattern),
        }
    }

    /// Check that a custom pattern only uses specifiers chrono understands
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(pattern)
                if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) =>
            {
                Err(LoggerError::timestamp(pattern.as_str()))
            }
            _ => Ok(()),
        }
    }
}

// `DelayedFormat` reports bad specifiers through `fmt::Error`; going through
// `write!` keeps that an error instead of the panic `to_string()` would raise.
fn render<Tz>(datetime: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::with_capacity(32);
    write!(out, "{}", datetime.format(pattern)).map_err(|_| LoggerError::timestamp(pattern))?;
    Ok(out)
}
