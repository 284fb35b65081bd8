//! Console appender implementation

use crate::core::{Appender, LogLevel, Result, ANSI_RESET};
use std::io::{self, Write};

/// Writes each line wrapped in the level's ANSI color and a reset code.
///
/// Colors are embedded whatever the destination is; there is no terminal
/// detection. By default lines go to stdout.
pub struct ConsoleAppender {
    use_colors: bool,
    writer: Box<dyn Write + Send>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            writer: Box::new(io::stdout()),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Send output to an arbitrary writer instead of stdout
    ///
    /// # Example
    ///
    /// ```
    /// use console_log::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::new().with_writer(std::io::stderr());
    /// ```
    #[must_use]
    pub fn with_writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.writer = Box::new(writer);
        self
    }

    /// The exact bytes written for one line
    pub fn format_line(&self, level: LogLevel, line: &str) -> String {
        if self.use_colors {
            format!("{}{}{}\n", level.ansi_prefix(), line, ANSI_RESET)
        } else {
            format!("{}\n", line)
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()> {
        // One write per line so a line is never split across writes.
        let output = self.format_line(level, line);
        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_colored_line() {
        let buf = SharedBuf::default();
        let mut appender = ConsoleAppender::new().with_writer(buf.clone());
        appender.append(LogLevel::Info, "[INFO] hello").unwrap();
        assert_eq!(buf.contents(), "\x1b[32m[INFO] hello\x1b[0m\n");
    }

    #[test]
    fn test_fatal_uses_background() {
        let buf = SharedBuf::default();
        let mut appender = ConsoleAppender::new().with_writer(buf.clone());
        appender.append(LogLevel::Fatal, "boom").unwrap();
        assert_eq!(buf.contents(), "\x1b[41m\x1b[37mboom\x1b[0m\n");
    }

    #[test]
    fn test_without_colors() {
        let buf = SharedBuf::default();
        let mut appender = ConsoleAppender::with_colors(false).with_writer(buf.clone());
        appender.append(LogLevel::Warning, "plain").unwrap();
        appender.append(LogLevel::Error, "lines").unwrap();
        assert_eq!(buf.contents(), "plain\nlines\n");
    }

    #[test]
    fn test_write_error_is_reported() {
        let mut appender = ConsoleAppender::new().with_writer(ClosedPipe);
        let err = appender.append(LogLevel::Info, "lost").unwrap_err();
        assert!(err.to_string().contains("closed"));
        assert_eq!(appender.name(), "console");
    }
}
