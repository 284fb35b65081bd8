//! Property-based tests for console_log using proptest

use console_log::core::message::join_display;
use console_log::prelude::*;
use console_log::sprintf;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that parsing ignores case
    #[test]
    fn test_log_level_parse_case_insensitive(level in any_level()) {
        let lower: LogLevel = level.to_str().to_lowercase().parse().unwrap();
        prop_assert_eq!(level, lower);
    }

    /// Test that LogLevel ordering follows the numeric rank
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Test that LogLevel Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(level.to_string(), level.to_str());
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// A call is written exactly when its level is at or above the minimum
    #[test]
    fn test_filtering_matches_ordering(min_level in any_level(), level in any_level()) {
        let capture = MemoryAppender::new();
        let logger = Logger::builder()
            .min_level(min_level)
            .fatal_policy(FatalPolicy::Continue)
            .appender(capture.clone())
            .build();

        logger.log(level, "m");
        prop_assert_eq!(capture.len() == 1, level >= min_level);
        prop_assert_eq!(logger.is_enabled(level), level >= min_level);
    }
}

// ============================================================================
// Template Tests
// ============================================================================

proptest! {
    /// Text without placeholders renders unchanged
    #[test]
    fn test_template_without_placeholders_is_literal(
        text in "[^{}]{0,40}",
        level in any_level(),
    ) {
        let template = FormatTemplate::new(text.clone());
        prop_assert_eq!(template.render(level, "ignored", || "ts".to_string()), text);
    }

    /// Messages are inserted verbatim, even when they look like placeholders
    #[test]
    fn test_message_is_never_rescanned(
        message in "(\\{level\\}|\\{timestamp\\}|\\{message\\}|[a-z %]){0,20}",
        level in any_level(),
    ) {
        let capture = MemoryAppender::new();
        let logger = Logger::builder()
            .min_level(LogLevel::Trace)
            .format("{level}|{message}")
            .fatal_policy(FatalPolicy::Continue)
            .appender(capture.clone())
            .build();

        logger.log(level, &message);
        prop_assert_eq!(&capture.lines()[0], &format!("{}|{}", level, message));
    }

    /// Every occurrence of a placeholder is replaced
    #[test]
    fn test_repeated_placeholders(count in 1usize..5, level in any_level()) {
        let template = FormatTemplate::new("{level}".repeat(count));
        prop_assert_eq!(
            template.render(level, "m", String::new),
            level.to_str().repeat(count)
        );
    }
}

// ============================================================================
// Stream Form Tests
// ============================================================================

proptest! {
    /// Values are joined by exactly one space with no trailing separator
    #[test]
    fn test_join_matches_space_separated(values in prop::collection::vec(any::<i64>(), 0..10)) {
        let expected = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(join_display(&values), expected);
    }

    #[test]
    fn test_join_single_value_is_unchanged(value in "[a-zA-Z0-9]{0,16}") {
        prop_assert_eq!(join_display([&value]), value);
    }
}

// ============================================================================
// Printf Tests
// ============================================================================

proptest! {
    #[test]
    fn test_printf_signed_decimal(value in any::<i64>()) {
        prop_assert_eq!(sprintf("%d", &[value.into()]).unwrap(), value.to_string());
    }

    #[test]
    fn test_printf_unsigned_hex(value in any::<u64>()) {
        prop_assert_eq!(sprintf("%x", &[value.into()]).unwrap(), format!("{:x}", value));
        prop_assert_eq!(sprintf("%X", &[value.into()]).unwrap(), format!("{:X}", value));
        prop_assert_eq!(sprintf("%o", &[value.into()]).unwrap(), format!("{:o}", value));
    }

    #[test]
    fn test_printf_width_alignment(value in any::<i32>(), width in 0usize..24) {
        let right = sprintf(&format!("%{}d", width), &[value.into()]).unwrap();
        prop_assert_eq!(right, format!("{:>width$}", value, width = width));

        let left = sprintf(&format!("%-{}d", width), &[value.into()]).unwrap();
        prop_assert_eq!(left, format!("{:<width$}", value, width = width));
    }

    #[test]
    fn test_printf_string_passthrough(text in "[a-zA-Z0-9 ]{0,32}", width in 0usize..40) {
        prop_assert_eq!(sprintf("%s", &[text.as_str().into()]).unwrap(), text.clone());
        let padded = sprintf(&format!("%{}s", width), &[text.as_str().into()]).unwrap();
        prop_assert_eq!(padded, format!("{:>width$}", text, width = width));
    }

    #[test]
    fn test_printf_fixed_precision(value in 0.0f64..1.0e9, precision in 0usize..8) {
        let rendered = sprintf(&format!("%.{}f", precision), &[value.into()]).unwrap();
        prop_assert_eq!(rendered, format!("{:.prec$}", value, prec = precision));
    }

    /// Format strings without conversions are copied as is
    #[test]
    fn test_printf_plain_text(text in "[^%]{0,64}") {
        prop_assert_eq!(sprintf(&text, &[]).unwrap(), text);
    }

    /// Every `%%` becomes one percent sign
    #[test]
    fn test_printf_percent_escape(count in 0usize..10) {
        prop_assert_eq!(sprintf(&"%%".repeat(count), &[]).unwrap(), "%".repeat(count));
    }
}
