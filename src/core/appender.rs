//! Appender trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// Destination for rendered lines.
///
/// The logger calls an appender while holding its lock, so implementations
/// see one line at a time and need no synchronization of their own.
pub trait Appender: Send {
    /// Write one rendered line (without trailing newline).
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
