//! Basic logger usage example
//!
//! Demonstrates the global logger, a custom template, all severities and
//! the three calling forms.
//!
//! Run with: cargo run --example basic_usage

use console_log::prelude::*;
use console_log::{debugf, infot};
use std::io;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Console Log - Basic Usage Example ===\n");

    let logger = logger();

    // Custom line template
    logger.set_format("[{timestamp}] [{level}] => {message}");

    // Show everything down to TRACE
    logger.set_log_level(LogLevel::Trace);

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Stream-style and printf-style calls:");
    logger.infot(&[&"Status:", &200]);
    logger.debugf("Formatted value: %d", &[42.into()]);
    infot!(logger, "Workers:", 4, "queue:", 12);
    debugf!(logger, "%-8s|%6.2f|", "ratio", 0.75);

    println!("\n3. Timing an operation:");
    let answer = logger.timed("Simulated operation", || {
        thread::sleep(Duration::from_millis(100));
        42
    });
    println!("   operation returned {}", answer);
    logger.log_with_duration("Manual measurement", Duration::from_millis(250));

    println!("\n4. Logging an error value:");
    let err = io::Error::new(io::ErrorKind::Other, "Simulated failure!");
    logger.log_exception(&err);

    println!("\n5. Raising the minimum level:");
    logger.set_log_level(LogLevel::Warning);
    logger.info("Info message (hidden)");
    logger.warning("Warning message (visible)");

    // FATAL ends the process with a failure status:
    // logger.fatal("This is a fatal message");

    println!("\n=== Example completed successfully! ===");

    logger.flush()
}
