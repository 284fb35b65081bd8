//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod printf;
pub mod template;
pub mod timestamp;

pub use appender::Appender;
pub use config::{FatalPolicy, LoggerConfig};
pub use error::{LoggerError, Result};
pub use log_level::{LogLevel, ANSI_RESET};
pub use logger::{Logger, LoggerBuilder};
pub use message::{DEFAULT_MESSAGE, FORMAT_ERROR_MESSAGE};
pub use metrics::LoggerMetrics;
pub use printf::{sprintf, FormatArg};
pub use template::{FormatTemplate, DEFAULT_TEMPLATE};
pub use timestamp::{TimestampFormat, TIMESTAMP_ERROR};
