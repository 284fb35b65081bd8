//! Logger configuration
//!
//! `LoggerConfig` is a plain serde value: the logger never reads files or
//! environment variables itself, but host applications can embed it in
//! their own configuration and hand it to [`LoggerBuilder::from_config`].
//!
//! [`LoggerBuilder::from_config`]: crate::core::LoggerBuilder::from_config

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::template::FormatTemplate;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// What a FATAL call does after its line is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FatalPolicy {
    /// Terminate the process with the given exit status
    Exit(i32),

    /// Record the call in the metrics and return to the caller
    Continue,
}

impl FatalPolicy {
    pub const EXIT_FAILURE: i32 = 1;
}

impl Default for FatalPolicy {
    fn default() -> Self {
        FatalPolicy::Exit(Self::EXIT_FAILURE)
    }
}

/// Serializable logger settings
///
/// Missing fields take their defaults:
///
/// ```
/// use console_log::{FatalPolicy, LogLevel, LoggerConfig};
///
/// let config: LoggerConfig = serde_json::from_str(r#"{"min_level":"Debug"}"#).unwrap();
/// assert_eq!(config.min_level, LogLevel::Debug);
/// assert_eq!(config.format.as_str(), "[{timestamp}] [{level}] {message}");
/// assert_eq!(config.fatal_policy, FatalPolicy::Exit(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub format: FormatTemplate,
    pub timestamp_format: TimestampFormat,
    pub fatal_policy: FatalPolicy,
}

impl LoggerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.format.as_str().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "format template is empty"));
        }
        self.timestamp_format.validate().map_err(|e| {
            LoggerError::config("LoggerConfig", format!("invalid timestamp format: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Info);
        assert_eq!(config.format, FormatTemplate::default());
        assert_eq!(config.timestamp_format, TimestampFormat::LocalDateTime);
        assert_eq!(config.fatal_policy, FatalPolicy::Exit(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "min_level": "Warning",
            "format": "{level} {message}",
            "timestamp_format": "Rfc3339",
            "fatal_policy": "Continue"
        }"#;
        let config: LoggerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.min_level, LogLevel::Warning);
        assert_eq!(config.format.as_str(), "{level} {message}");
        assert_eq!(config.timestamp_format, TimestampFormat::Rfc3339);
        assert_eq!(config.fatal_policy, FatalPolicy::Continue);
    }

    #[test]
    fn test_serialize_roundtrip_exit_code() {
        let config = LoggerConfig {
            fatal_policy: FatalPolicy::Exit(3),
            ..LoggerConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""fatal_policy":{"Exit":3}"#));
        let back: LoggerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validate_rejects_empty_template() {
        let config = LoggerConfig {
            format: FormatTemplate::new(""),
            ..LoggerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_timestamp_pattern() {
        let config = LoggerConfig {
            timestamp_format: TimestampFormat::Custom("%Y %!".to_string()),
            ..LoggerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("invalid timestamp format"));
    }
}
