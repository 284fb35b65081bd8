//! # Console Log
//!
//! A process-wide console logger with severity filtering, line templates
//! and ANSI colors.
//!
//! ## Features
//!
//! - **Three calling forms**: plain messages, C-style `printf` format
//!   strings, and space-joined `Display` values
//! - **Templates**: `{timestamp}`, `{level}` and `{message}` placeholders
//! - **Thread Safe**: one lock serializes configuration and output, so lines
//!   never interleave
//! - **Fail-safe**: logging calls never return errors or panic; FATAL is
//!   the only call that ends the process
//!
//! ```
//! use console_log::prelude::*;
//!
//! let capture = MemoryAppender::new();
//! let logger = Logger::builder()
//!     .min_level(LogLevel::Trace)
//!     .format("[{level}] => {message}")
//!     .appender(capture.clone())
//!     .build();
//!
//! logger.debugf("Mensagem formatada com valor: %d", &[42.into()]);
//! logger.infot(&[&"Status:", &200]);
//!
//! assert_eq!(
//!     capture.lines(),
//!     ["[DEBUG] => Mensagem formatada com valor: 42", "[INFO] => Status: 200"]
//! );
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

#[cfg(feature = "log-bridge")]
pub mod log_bridge;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        Appender, FatalPolicy, FormatArg, FormatTemplate, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
    pub use crate::logger;
}

pub use appenders::{ConsoleAppender, MemoryAppender};
pub use crate::core::{
    sprintf, Appender, FatalPolicy, FormatArg, FormatTemplate, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Result, TimestampFormat, DEFAULT_MESSAGE,
    DEFAULT_TEMPLATE, FORMAT_ERROR_MESSAGE, TIMESTAMP_ERROR,
};

#[cfg(feature = "log-bridge")]
pub use log_bridge::init_log_bridge;

/// The process-wide logger; shorthand for [`Logger::instance`]
pub fn logger() -> &'static Logger {
    Logger::instance()
}
