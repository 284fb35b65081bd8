//! Line template with `{timestamp}`, `{level}` and `{message}` placeholders

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TIMESTAMP_PLACEHOLDER: &str = "{timestamp}";
pub const LEVEL_PLACEHOLDER: &str = "{level}";
pub const MESSAGE_PLACEHOLDER: &str = "{message}";

/// Template used for every line until replaced.
pub const DEFAULT_TEMPLATE: &str = "[{timestamp}] [{level}] {message}";

/// A line template
///
/// Placeholders are substituted in a single left-to-right pass. Inserted
/// text is never rescanned, so a message containing `{level}` is printed
/// verbatim. Anything that is
/// not one of the three placeholders, including other `{...}` tokens, is
/// copied through unchanged.
///
/// # Examples
///
/// ```
/// use console_log::{FormatTemplate, LogLevel};
///
/// let template = FormatTemplate::new("{level}: {message} {unknown}");
/// let line = template.render(LogLevel::Warning, "disk low", || unreachable!());
/// assert_eq!(line, "WARNING: disk low {unknown}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatTemplate(String);

impl FormatTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render one line.
    ///
    /// `timestamp` is only called when the template references `{timestamp}`,
    /// and at most once however many times it appears.
    pub fn render<F>(&self, level: LogLevel, message: &str, timestamp: F) -> String
    where
        F: FnOnce() -> String,
    {
        let mut clock = Some(timestamp);
        let mut stamp: Option<String> = None;
        let mut line = String::with_capacity(self.0.len() + message.len() + 32);
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find('{') {
            line.push_str(&rest[..open]);
            let tail = &rest[open..];
            if let Some(after) = tail.strip_prefix(TIMESTAMP_PLACEHOLDER) {
                let text = stamp.get_or_insert_with(|| clock.take().map_or_else(String::new, |f| f()));
                line.push_str(text);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(LEVEL_PLACEHOLDER) {
                line.push_str(level.to_str());
                rest = after;
            } else if let Some(after) = tail.strip_prefix(MESSAGE_PLACEHOLDER) {
                line.push_str(message);
                rest = after;
            } else {
                line.push('{');
                rest = &tail[1..];
            }
        }
        line.push_str(rest);
        line
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormatTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for FormatTemplate {
    fn from(template: String) -> Self {
        Self(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> String {
        "2025-01-08 10:30:45".to_string()
    }

    #[test]
    fn test_default_template() {
        let line = FormatTemplate::default().render(LogLevel::Info, "hello", ts);
        assert_eq!(line, "[2025-01-08 10:30:45] [INFO] hello");
    }

    #[test]
    fn test_custom_template() {
        let template = FormatTemplate::new("[{timestamp}] [{level}] => {message}");
        let line = template.render(LogLevel::Info, "hi", ts);
        assert!(line.contains("[INFO]"));
        assert!(line.ends_with("] => hi"));
    }

    #[test]
    fn test_repeated_placeholders() {
        let template = FormatTemplate::new("{level}|{level}|{message}{message}");
        let line = template.render(LogLevel::Error, "x", ts);
        assert_eq!(line, "ERROR|ERROR|xx");
    }

    #[test]
    fn test_message_is_not_rescanned() {
        let line = FormatTemplate::default().render(LogLevel::Debug, "{level} {timestamp}", ts);
        assert_eq!(line, "[2025-01-08 10:30:45] [DEBUG] {level} {timestamp}");
    }

    #[test]
    fn test_timestamp_text_is_not_rescanned() {
        let template = FormatTemplate::new("{timestamp}|{timestamp}|{level}");
        let line = template.render(LogLevel::Warning, "m", || "{message}".to_string());
        assert_eq!(line, "{message}|{message}|WARNING");
    }

    #[test]
    fn test_nested_braces() {
        let template = FormatTemplate::new("{{level}} {message");
        assert_eq!(template.render(LogLevel::Info, "m", ts), "{INFO} {message");
    }

    #[test]
    fn test_unknown_placeholder_verbatim() {
        let template = FormatTemplate::new("{pid} {message} {Level}");
        let line = template.render(LogLevel::Info, "m", ts);
        assert_eq!(line, "{pid} m {Level}");
    }

    #[test]
    fn test_clock_not_read_without_placeholder() {
        let template = FormatTemplate::new("{level} {message}");
        let line = template.render(LogLevel::Info, "m", || panic!("clock read"));
        assert_eq!(line, "INFO m");
    }

    #[test]
    fn test_literal_only_template() {
        let template = FormatTemplate::new("static text");
        assert_eq!(template.render(LogLevel::Fatal, "ignored", ts), "static text");
    }
}
