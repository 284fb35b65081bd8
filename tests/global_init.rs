//! Explicit initialization of the process-wide logger
//!
//! Lives in its own binary so nothing touches the global before `init`.

use console_log::prelude::*;
use console_log::{info, infof};

#[test]
fn test_init_before_first_use() {
    let capture = MemoryAppender::new();
    let installed = Logger::init(
        Logger::builder()
            .min_level(LogLevel::Warning)
            .format("<{level}> {message}")
            .appender(capture.clone()),
    )
    .expect("global not yet created");

    assert!(std::ptr::eq(installed, Logger::instance()));
    assert_eq!(logger().log_level(), LogLevel::Warning);

    info!(logger(), "filtered");
    infof!(logger(), "%s", "filtered");
    logger().warningf("%d%%", &[80.into()]);
    logger().errort(&[&"disk", &"full"]);
    assert_eq!(capture.lines(), ["<WARNING> 80%", "<ERROR> disk full"]);

    let again = Logger::init(Logger::builder());
    assert!(matches!(again, Err(LoggerError::AlreadyInitialized)));
}
