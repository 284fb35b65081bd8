//! Error types for the logger system
//!
//! None of these escape the emit path: a failed log call degrades to a
//! fallback message instead. They surface only from configuration and
//! installation APIs, and from the lower-level renderers the logger uses.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// printf-style format string could not be rendered
    #[error("Format error in '{format}': {message}")]
    Format { format: String, message: String },

    /// Timestamp could not be rendered with the configured pattern
    #[error("Timestamp error: cannot render pattern '{format}'")]
    Timestamp { format: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// The global logger was already created
    #[error("Global logger already initialized")]
    AlreadyInitialized,

    /// Another `log` backend is already registered
    #[cfg(feature = "log-bridge")]
    #[error("Failed to install log bridge: {0}")]
    BridgeInstall(#[from] log::SetLoggerError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a format error for the given format string
    pub fn format(format: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Format {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Create a timestamp error
    pub fn timestamp(format: impl Into<String>) -> Self {
        LoggerError::Timestamp {
            format: format.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::format("%q", "unsupported conversion 'q'");
        assert!(matches!(err, LoggerError::Format { .. }));

        let err = LoggerError::config("LoggerConfig", "empty format template");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::timestamp("%Y-%!");
        assert!(matches!(err, LoggerError::Timestamp { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::format("%d %d", "missing argument for conversion 2");
        assert_eq!(
            err.to_string(),
            "Format error in '%d %d': missing argument for conversion 2"
        );

        let err = LoggerError::config("LoggerConfig", "empty format template");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: empty format template"
        );

        assert_eq!(
            LoggerError::AlreadyInitialized.to_string(),
            "Global logger already initialized"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
