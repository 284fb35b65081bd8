//! Log level definitions

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ANSI sequence that restores the terminal's default colors.
pub const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warning = 3,
    Error = 4,
    Fatal = 5,
}

impl LogLevel {
    /// All levels in ascending order of severity.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Foreground and optional background color for this level.
    pub fn colors(&self) -> (Color, Option<Color>) {
        use colored::Color::*;
        match self {
            LogLevel::Trace => (BrightBlack, None),
            LogLevel::Debug => (Cyan, None),
            LogLevel::Info => (Green, None),
            LogLevel::Warning => (Yellow, None),
            LogLevel::Error => (Red, None),
            LogLevel::Fatal => (White, Some(Red)),
        }
    }

    /// Raw ANSI escape prefix for this level.
    ///
    /// The sequence is built unconditionally, independent of whether the
    /// output is a terminal.
    ///
    /// ```
    /// use console_log::LogLevel;
    ///
    /// assert_eq!(LogLevel::Info.ansi_prefix(), "\x1b[32m");
    /// assert_eq!(LogLevel::Fatal.ansi_prefix(), "\x1b[41m\x1b[37m");
    /// ```
    pub fn ansi_prefix(&self) -> String {
        match self.colors() {
            (fg, Some(bg)) => format!("\x1b[{}m\x1b[{}m", bg.to_bg_str(), fg.to_fg_str()),
            (fg, None) => format!("\x1b[{}m", fg.to_fg_str()),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
