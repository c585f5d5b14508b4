//! Integration tests for argument forwarding edge cases.
//!
//! These tests verify that arguments reach the sink unchanged: empty lists,
//! structured values, unicode content, and long argument lists, whether
//! the call goes through a logger directly or through a context.

use std::collections::BTreeMap;
use std::sync::Arc;

use logging::{Logger, Severity, log_debug, log_error};
use logging_sink::{Channel, ConsoleSink, LineMode, Record, RecordingSink, Text};

fn recording(level: Severity) -> (Logger<Arc<RecordingSink>>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    (Logger::with_sink(Arc::clone(&sink)).with_level(level), sink)
}

// ============================================================================
// Empty Argument Tests
// ============================================================================

/// Verifies a zero-argument call still reaches the sink as an empty list.
#[test]
fn empty_call_forwards_empty_list() {
    let (logger, sink) = recording(Severity::Error);
    logger.error(&[]);
    assert_eq!(sink.drain(), [Record::new(Channel::Error, Vec::<String>::new())]);
}

/// Verifies a zero-argument context call forwards only the prefix.
#[test]
fn empty_context_call_forwards_prefix() {
    let (logger, sink) = recording(Severity::Error);
    logger.context("p").error(&[]);
    assert_eq!(sink.drain(), [Record::new(Channel::Error, ["p"])]);
}

/// Verifies empty strings are forwarded rather than dropped.
#[test]
fn empty_string_argument_is_kept() {
    let (logger, sink) = recording(Severity::Info);
    logger.info(&[&""]);
    assert_eq!(sink.drain()[0].arguments, ["\"\""]);
}

// ============================================================================
// Argument Fidelity Tests
// ============================================================================

/// Verifies mixed argument types arrive in order.
#[test]
fn mixed_arguments_keep_order() {
    let (logger, sink) = recording(Severity::Debug);
    let mut map = BTreeMap::new();
    map.insert("k", 1);
    let list = [1, 2];

    log_debug!(logger, "a", map, list);

    assert_eq!(
        sink.drain(),
        [Record::new(Channel::Debug, ["\"a\"", "{\"k\": 1}", "[1, 2]"])]
    );
}

/// Verifies unicode and control characters pass through untouched.
#[test]
fn unicode_arguments_pass_through() {
    let (logger, sink) = recording(Severity::Warn);
    logger.warn(&[&format_args!("naïve café 日本語 🚀")]);
    assert_eq!(sink.drain()[0].arguments, ["naïve café 日本語 🚀"]);
}

/// Verifies long argument lists are not truncated.
#[test]
fn long_argument_list_is_not_truncated() {
    let (logger, sink) = recording(Severity::Error);
    let values: Vec<usize> = (0..64).collect();
    let args: Vec<&dyn std::fmt::Debug> = values.iter().map(|v| v as &dyn std::fmt::Debug).collect();

    logger.error(&args);

    let expected: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(sink.drain()[0].arguments, expected);
}

/// Verifies context and direct calls never share arguments.
#[test]
fn context_does_not_leak_into_direct_calls() {
    let (logger, sink) = recording(Severity::Error);
    let ctx = logger.context("new context");

    log_error!(ctx, "hello", "world");
    log_error!(logger, "hello", "world");

    assert_eq!(
        sink.drain(),
        [
            Record::new(Channel::Error, ["new context", "\"hello\"", "\"world\""]),
            Record::new(Channel::Error, ["\"hello\"", "\"world\""]),
        ]
    );
}

// ============================================================================
// Console Output Tests
// ============================================================================

/// Verifies a logger over a console sink routes by channel and filters by level.
#[test]
fn console_sink_output_follows_threshold() {
    let logger = Logger::with_sink(ConsoleSink::new(Vec::new(), Vec::new()))
        .with_level(Severity::Warn);

    logger.error(&[&format_args!("disk failed")]);
    logger.warn(&[&format_args!("retrying"), &2]);
    logger.info(&[&format_args!("hidden")]);

    let (out, err, mode) = logger.into_sink().into_parts();
    assert_eq!(mode, LineMode::WithNewline);
    assert!(out.is_empty());
    assert_eq!(String::from_utf8(err).unwrap(), "disk failed\nretrying 2\n");
}

/// Verifies the invalid-level diagnostic reaches the console error stream.
#[test]
fn console_sink_receives_invalid_level_diagnostic() {
    let logger = Logger::with_sink(ConsoleSink::new(Vec::new(), Vec::new()));
    logger.set_level("shout");

    let (_, err, _) = logger.into_sink().into_parts();
    assert_eq!(
        String::from_utf8(err).unwrap(),
        "invalid log level \"shout\"; turning logging off\n"
    );
}

/// Verifies a context line on the console reads as plain text.
#[test]
fn console_context_line_is_plain_text() {
    let logger = Logger::with_sink(ConsoleSink::new(Vec::new(), Vec::new()))
        .with_level(Severity::Info);

    logger.context("http").info(&[&Text("listening")]);
    logger
        .context("http")
        .info(&[&Text("line1\nline2"), &format_args!("port {}", 80)]);
    logger.context("http").info(&[&"quoted"]);

    let (out, err, _) = logger.into_sink().into_parts();
    assert!(err.is_empty());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "http listening\nhttp line1\nline2 port 80\nhttp \"quoted\"\n"
    );
}
