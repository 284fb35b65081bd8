//! In-memory appender
//!
//! Keeps rendered lines instead of printing them. Clones share the same
//! buffer, so a handle kept by the caller sees what the logger wrote.

use crate::core::{Appender, LogLevel, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: LogLevel,
    pub line: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far
    pub fn records(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    /// Captured line texts, in write order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().iter().map(|c| c.line.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()> {
        self.lines.lock().push(CapturedLine {
            level,
            line: line.to_string(),
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
