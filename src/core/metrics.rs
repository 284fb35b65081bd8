//! Logger metrics for observability
//!
//! Counters describing what happened to log calls: how many lines were
//! written, how many calls were below the minimum level, and how often the
//! emit path had to degrade.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use console_log::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.filtered_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines rendered and written by the appender
    emitted: AtomicU64,

    /// Calls dropped because they were below the minimum level
    filtered: AtomicU64,

    /// printf-style calls that fell back to "format error"
    format_errors: AtomicU64,

    /// Renders that fell back to "[timestamp error]"
    timestamp_errors: AtomicU64,

    /// Calls whose render or write failed and went to stderr instead
    fallback_writes: AtomicU64,

    /// FATAL calls observed
    fatal: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            format_errors: AtomicU64::new(0),
            timestamp_errors: AtomicU64::new(0),
            fallback_writes: AtomicU64::new(0),
            fatal: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn format_error_count(&self) -> u64 {
        self.format_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn timestamp_error_count(&self) -> u64 {
        self.timestamp_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fallback_write_count(&self) -> u64 {
        self.fallback_writes.load(Ordering::Relaxed)
    }

    /// Number of FATAL calls; only observable when the fatal policy
    /// lets the process continue.
    #[inline]
    pub fn fatal_count(&self) -> u64 {
        self.fatal.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) {
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_filtered(&self) {
        self.filtered.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_format_error(&self) {
        self.format_errors.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_timestamp_error(&self) {
        self.timestamp_errors.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_fallback_write(&self) {
        self.fallback_writes.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_fatal(&self) {
        self.fatal.fetch_add(1, Ordering::Relaxed);
    }

    /// Total number of calls that reached the logger, emitted or not
    pub fn total_calls(&self) -> u64 {
        self.emitted_count() + self.filtered_count() + self.fallback_write_count()
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.format_errors.store(0, Ordering::Relaxed);
        self.timestamp_errors.store(0, Ordering::Relaxed);
        self.fallback_writes.store(0, Ordering::Relaxed);
        self.fatal.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
