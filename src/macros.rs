//! Logging macros for the three calling forms.
//!
//! - `info!(logger, "x = {}", x)` uses Rust formatting syntax, rendered
//!   only when the level is enabled; `info!(logger)` logs the placeholder
//!   message `"..."`.
//! - `infof!(logger, "x = %d", x)` formats C-style; every argument is
//!   converted with `FormatArg::from`.
//! - `infot!(logger, "Status:", 200)` joins `Display` values with spaces.
//!
//! # Examples
//!
//! ```
//! use console_log::prelude::*;
//! use console_log::{info, infof, infot};
//!
//! let capture = MemoryAppender::new();
//! let logger = Logger::builder()
//!     .format("{message}")
//!     .appender(capture.clone())
//!     .build();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! infof!(logger, "Server listening on port %d", port);
//! infot!(logger, "Server listening on port", port);
//!
//! assert!(capture.lines().iter().all(|l| l == "Server listening on port 8080"));
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use console_log::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use console_log::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, LogLevel::Warning);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr) => {
        $logger.log($level, $crate::DEFAULT_MESSAGE)
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_args($level, format_args!($($arg)+))
    };
}

/// Log a printf-style message.
///
/// # Examples
///
/// ```
/// # use console_log::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use console_log::logf;
/// logf!(logger, LogLevel::Info, "%s took %.1f s", "backup", 12.5);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.logf($level, $fmt, &[$($crate::FormatArg::from($arg)),*])
    };
}

/// Log values joined by single spaces.
///
/// # Examples
///
/// ```
/// # use console_log::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use console_log::logt;
/// logt!(logger, LogLevel::Info, "Status:", 200, 'k');
/// ```
#[macro_export]
macro_rules! logt {
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $logger.log_joined($level, [$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr) => {
        $crate::log!($logger, $crate::LogLevel::Trace)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr) => {
        $crate::log!($logger, $crate::LogLevel::Debug)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use console_log::prelude::*;
/// # let logger = Logger::builder().appender(MemoryAppender::new()).build();
/// use console_log::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// info!(logger);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr) => {
        $crate::log!($logger, $crate::LogLevel::Info)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr) => {
        $crate::log!($logger, $crate::LogLevel::Warning)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr) => {
        $crate::log!($logger, $crate::LogLevel::Error)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. Terminates the process under the default
/// fatal policy.
#[macro_export]
macro_rules! fatal {
    ($logger:expr) => {
        $crate::log!($logger, $crate::LogLevel::Fatal)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Trace, $($rest)+)
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Debug, $($rest)+)
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Info, $($rest)+)
    };
}

#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Warning, $($rest)+)
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Error, $($rest)+)
    };
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Fatal, $($rest)+)
    };
}

#[macro_export]
macro_rules! tracet {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logt!($logger, $crate::LogLevel::Trace, $($rest)+)
    };
}

#[macro_export]
macro_rules! debugt {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logt!($logger, $crate::LogLevel::Debug, $($rest)+)
    };
}

#[macro_export]
macro_rules! infot {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logt!($logger, $crate::LogLevel::Info, $($rest)+)
    };
}

#[macro_export]
macro_rules! warningt {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logt!($logger, $crate::LogLevel::Warning, $($rest)+)
    };
}

#[macro_export]
macro_rules! errort {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logt!($logger, $crate::LogLevel::Error, $($rest)+)
    };
}

#[macro_export]
macro_rules! fatalt {
    ($logger:expr, $($rest:tt)+) => {
        $crate::logt!($logger, $crate::LogLevel::Fatal, $($rest)+)
    };
}
