//! Backend for the `log` crate facade
//!
//! Routes `log::info!` and friends from any library through the global
//! [`Logger`], so its level filter, template and colors apply to them too.

use crate::core::{LogLevel, Logger, Result};
use log::{Level, LevelFilter, Metadata, Record};

struct Bridge;

static BRIDGE: Bridge = Bridge;

impl log::Log for Bridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Logger::instance().is_enabled(level_from_log(metadata.level()))
    }

    fn log(&self, record: &Record) {
        // Filtering happens inside the logger, under its lock.
        Logger::instance().log_args(level_from_log(record.level()), *record.args());
    }

    fn flush(&self) {
        let _ = Logger::instance().flush();
    }
}

pub fn level_from_log(level: Level) -> LogLevel {
    match level {
        Level::Error => LogLevel::Error,
        Level::Warn => LogLevel::Warning,
        Level::Info => LogLevel::Info,
        Level::Debug => LogLevel::Debug,
        Level::Trace => LogLevel::Trace,
    }
}

/// Register the global logger as the `log` backend.
///
/// The facade's own max level is opened fully; the logger's minimum level
/// decides what is written. Fails if another backend is already set.
pub fn init_log_bridge() -> Result<()> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
