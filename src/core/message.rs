//! Message text built by the convenience entry points

use std::error::Error;
use std::fmt::{self, Write};
use std::time::Duration;

/// Message used when a call site has nothing to say.
pub const DEFAULT_MESSAGE: &str = "...";

/// Replaces the message of a printf-style call that failed to render.
pub const FORMAT_ERROR_MESSAGE: &str = "format error";

/// Join values with a single space, rendering each with `Display`.
///
/// ```
/// use console_log::core::message::join_display;
///
/// assert_eq!(join_display(["a", "b", "c"]), "a b c");
/// assert_eq!(join_display(Vec::<u8>::new()), "");
/// ```
pub fn join_display<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut out = String::new();
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        // Writing into a String only fails if the Display impl does.
        if write!(out, "{}", item).is_err() {
            out.push_str(FORMAT_ERROR_MESSAGE);
        }
    }
    out
}

/// Render formatting arguments, or `None` if a `Display` impl fails.
///
/// Unlike `format!`, a `fmt::Error` from the caller's values does not panic.
pub fn render_args(args: fmt::Arguments<'_>) -> Option<String> {
    let mut out = String::new();
    out.write_fmt(args).ok()?;
    Some(out)
}

/// `"Exception: <error>"`, or `None` if the error cannot be displayed
pub fn exception_message<E>(error: &E) -> Option<String>
where
    E: Error + ?Sized,
{
    render_args(format_args!("Exception: {}", error))
}

pub fn duration_message(message: &str, duration: Duration) -> String {
    format!("{} (took {}ms)", message, duration.as_millis())
}
