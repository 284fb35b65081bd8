//! Main logger implementation

use super::{
    appender::Appender,
    config::{FatalPolicy, LoggerConfig},
    error::{LoggerError, Result},
    log_level::LogLevel,
    message::{self, FORMAT_ERROR_MESSAGE},
    metrics::LoggerMetrics,
    printf::{self, FormatArg},
    template::FormatTemplate,
    timestamp::{TimestampFormat, TIMESTAMP_ERROR},
};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Stands in for a message whose arguments could not be rendered.
const UNRENDERABLE_MESSAGE: &str = "<message could not be rendered>";

/// Everything guarded by the logger's lock
struct LoggerState {
    min_level: LogLevel,
    template: FormatTemplate,
    timestamp_format: TimestampFormat,
    appender: Box<dyn Appender>,
}

/// Leveled console logger
///
/// One mutex guards the configuration and the write path, so rendered
/// lines from concurrent callers never interleave and configuration
/// changes are never seen half-applied. Logging calls never return errors
/// and never panic: failures degrade to fallback text or a raw line on
/// stderr.
///
/// A FATAL call terminates the process after its line is written, unless
/// the logger was built with [`FatalPolicy::Continue`].
///
/// # Examples
///
/// ```
/// use console_log::prelude::*;
///
/// let capture = MemoryAppender::new();
/// let logger = Logger::builder()
///     .format("{level} {message}")
///     .appender(capture.clone())
///     .build();
///
/// logger.info("ready");
/// logger.debug("hidden below INFO");
/// logger.infof("%d workers", &[4.into()]);
/// logger.warningt(&[&"queue depth", &12]);
///
/// assert_eq!(capture.lines(), ["INFO ready", "INFO 4 workers", "WARNING queue depth 12"]);
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
    metrics: LoggerMetrics,
    fatal_policy: FatalPolicy,
}

impl Logger {
    /// Standalone logger with default settings, writing to stdout
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// The process-wide logger, created with default settings on first use
    pub fn instance() -> &'static Logger {
        GLOBAL.get_or_init(Logger::new)
    }

    /// Create the process-wide logger from a builder
    ///
    /// Fails if the global logger already exists, including when it was
    /// created implicitly by an earlier [`Logger::instance`] call.
    pub fn init(builder: LoggerBuilder) -> Result<&'static Logger> {
        let mut installed = false;
        let logger = GLOBAL.get_or_init(|| {
            installed = true;
            builder.build()
        });
        if installed {
            Ok(logger)
        } else {
            Err(LoggerError::AlreadyInitialized)
        }
    }

    pub fn set_log_level(&self, level: LogLevel) {
        self.state.lock().min_level = level;
    }

    pub fn log_level(&self) -> LogLevel {
        self.state.lock().min_level
    }

    /// Replace the line template
    ///
    /// Recognized placeholders are `{timestamp}`, `{level}` and `{message}`;
    /// anything else is printed as is.
    pub fn set_format(&self, template: impl Into<FormatTemplate>) {
        self.state.lock().template = template.into();
    }

    pub fn format(&self) -> String {
        self.state.lock().template.as_str().to_string()
    }

    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        self.state.lock().timestamp_format = format;
    }

    /// Swap the output destination, returning the previous one
    pub fn set_appender(&self, appender: Box<dyn Appender>) -> Box<dyn Appender> {
        std::mem::replace(&mut self.state.lock().appender, appender)
    }

    /// Whether a call at `level` would currently be written
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.state.lock().min_level
    }

    pub fn fatal_policy(&self) -> FatalPolicy {
        self.fatal_policy
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.state.lock().appender.flush()
    }

    /// Log a message at the given level
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.emit(level, message.as_ref());
    }

    /// Log pre-bound formatting arguments, as produced by `format_args!`
    ///
    /// The arguments are rendered only if the level passes the filter. A
    /// `Display` impl that fails or panics sends the call to the stderr
    /// fallback instead of reaching the caller.
    pub fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit_with(level, || message::render_args(args).map(Cow::Owned));
    }

    /// Log a printf-style message
    ///
    /// A format string that cannot be rendered with `args` logs
    /// `"format error"` instead.
    pub fn logf(&self, level: LogLevel, format: &str, args: &[FormatArg<'_>]) {
        self.emit_with(level, || {
            let message = printf::sprintf(format, args).unwrap_or_else(|_| {
                self.metrics.record_format_error();
                FORMAT_ERROR_MESSAGE.to_string()
            });
            Some(Cow::Owned(message))
        });
    }

    /// Log values joined by single spaces
    pub fn log_joined<I>(&self, level: LogLevel, items: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.emit_with(level, || Some(Cow::Owned(message::join_display(items))));
    }

    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Trace, message);
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at FATAL, then apply the fatal policy
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Fatal, message);
    }

    pub fn tracef(&self, format: &str, args: &[FormatArg<'_>]) {
        self.logf(LogLevel::Trace, format, args);
    }

    pub fn debugf(&self, format: &str, args: &[FormatArg<'_>]) {
        self.logf(LogLevel::Debug, format, args);
    }

    pub fn infof(&self, format: &str, args: &[FormatArg<'_>]) {
        self.logf(LogLevel::Info, format, args);
    }

    pub fn warningf(&self, format: &str, args: &[FormatArg<'_>]) {
        self.logf(LogLevel::Warning, format, args);
    }

    pub fn errorf(&self, format: &str, args: &[FormatArg<'_>]) {
        self.logf(LogLevel::Error, format, args);
    }

    pub fn fatalf(&self, format: &str, args: &[FormatArg<'_>]) {
        self.logf(LogLevel::Fatal, format, args);
    }

    pub fn tracet(&self, args: &[&dyn fmt::Display]) {
        self.log_joined(LogLevel::Trace, args);
    }

    pub fn debugt(&self, args: &[&dyn fmt::Display]) {
        self.log_joined(LogLevel::Debug, args);
    }

    pub fn infot(&self, args: &[&dyn fmt::Display]) {
        self.log_joined(LogLevel::Info, args);
    }

    pub fn warningt(&self, args: &[&dyn fmt::Display]) {
        self.log_joined(LogLevel::Warning, args);
    }

    pub fn errort(&self, args: &[&dyn fmt::Display]) {
        self.log_joined(LogLevel::Error, args);
    }

    pub fn fatalt(&self, args: &[&dyn fmt::Display]) {
        self.log_joined(LogLevel::Fatal, args);
    }

    /// Log `"Exception: <error>"` at ERROR
    pub fn log_exception<E>(&self, error: &E)
    where
        E: Error + ?Sized,
    {
        self.log_exception_at(error, LogLevel::Error);
    }

    pub fn log_exception_at<E>(&self, error: &E, level: LogLevel)
    where
        E: Error + ?Sized,
    {
        self.emit_with(level, || message::exception_message(error).map(Cow::Owned));
    }

    /// Log `"<message> (took <ms>ms)"` at INFO
    pub fn log_with_duration(&self, message: &str, duration: Duration) {
        self.log_with_duration_at(message, duration, LogLevel::Info);
    }

    pub fn log_with_duration_at(&self, message: &str, duration: Duration, level: LogLevel) {
        self.log(level, message::duration_message(message, duration));
    }

    /// Run `operation` and log how long it took at INFO
    pub fn timed<T, F>(&self, message: &str, operation: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let value = operation();
        self.log_with_duration(message, start.elapsed());
        value
    }

    fn emit(&self, level: LogLevel, message: &str) {
        self.emit_with(level, || Some(Cow::Borrowed(message)));
    }

    /// Filter, then build the message, render and write it under the lock
    ///
    /// `build` returns `None` when the caller's values cannot be turned into
    /// text. It runs after filtering, so dropped calls never format anything.
    fn emit_with<'m, F>(&self, level: LogLevel, build: F)
    where
        F: FnOnce() -> Option<Cow<'m, str>>,
    {
        let mut state = self.state.lock();
        if level < state.min_level {
            self.metrics.record_filtered();
            return;
        }

        // Panic isolation covers the caller's Display impls as well as the
        // appender.
        let mut message: Option<Cow<'m, str>> = None;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let built = build()
                .ok_or_else(|| LoggerError::other("message arguments failed to render"))?;
            let built: &str = message.insert(built);
            self.write_locked(&mut state, level, built)
        }));
        match outcome {
            Ok(Ok(())) => self.metrics.record_emitted(),
            Ok(Err(_)) | Err(_) => {
                self.write_fallback(message.as_deref().unwrap_or(UNRENDERABLE_MESSAGE))
            }
        }

        if level == LogLevel::Fatal {
            // Still holding the lock: nothing is written after a fatal line.
            self.handle_fatal();
        }
    }

    fn write_locked(&self, state: &mut LoggerState, level: LogLevel, message: &str) -> Result<()> {
        let timestamp_format = &state.timestamp_format;
        let line = state.template.render(level, message, || {
            timestamp_format.now().unwrap_or_else(|_| {
                self.metrics.record_timestamp_error();
                TIMESTAMP_ERROR.to_string()
            })
        });
        state.appender.append(level, &line)
    }

    fn write_fallback(&self, message: &str) {
        self.metrics.record_fallback_write();
        let _ = writeln!(io::stderr(), "LOG ERROR: {}", message);
    }

    fn handle_fatal(&self) {
        self.metrics.record_fatal();
        if let FatalPolicy::Exit(code) = self.fatal_policy {
            process::exit(code);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("min_level", &state.min_level)
            .field("template", &state.template)
            .field("timestamp_format", &state.timestamp_format)
            .field("appender", &state.appender.name())
            .field("fatal_policy", &self.fatal_policy)
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.state.get_mut().appender.flush();
    }
}

/// Builder for [`Logger`]
///
/// # Example
///
/// ```
/// use console_log::{FatalPolicy, LogLevel, Logger, TimestampFormat};
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .format("[{timestamp}] {level}: {message}")
///     .timestamp_format(TimestampFormat::Rfc3339)
///     .fatal_policy(FatalPolicy::Continue)
///     .build();
///
/// assert_eq!(logger.log_level(), LogLevel::Debug);
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    template: FormatTemplate,
    timestamp_format: TimestampFormat,
    fatal_policy: FatalPolicy,
    appender: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            template: FormatTemplate::default(),
            timestamp_format: TimestampFormat::default(),
            fatal_policy: FatalPolicy::default(),
            appender: None,
        }
    }

    /// Start from validated configuration
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            min_level: config.min_level,
            template: config.format,
            timestamp_format: config.timestamp_format,
            fatal_policy: config.fatal_policy,
            appender: None,
        })
    }

    #[must_use]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn format(mut self, template: impl Into<FormatTemplate>) -> Self {
        self.template = template.into();
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn fatal_policy(mut self, policy: FatalPolicy) -> Self {
        self.fatal_policy = policy;
        self
    }

    /// Output destination; a stdout [`ConsoleAppender`] when not set
    #[must_use]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    pub fn build(self) -> Logger {
        let appender = self
            .appender
            .unwrap_or_else(|| Box::new(ConsoleAppender::new()));
        Logger {
            state: Mutex::new(LoggerState {
                min_level: self.min_level,
                template: self.template,
                timestamp_format: self.timestamp_format,
                appender,
            }),
            metrics: LoggerMetrics::new(),
            fatal_policy: self.fatal_policy,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
