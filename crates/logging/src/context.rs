//! crates/logging/src/context.rs
//! Prefixing decorator over a borrowed [`Logger`].

use std::fmt;

use logging_sink::{Argument, Sink, StdioSink, Text};

use crate::levels::Severity;
use crate::logger::Logger;

/// Decorator that prepends a fixed prefix to every call it forwards.
///
/// A context owns no threshold. Each call is delegated to the identically
/// named method of the borrowed [`Logger`] with the prefix as the first
/// argument, so filtering is exactly the logger's and every context built from
/// one logger observes the same live level.
///
/// The prefix travels as [`Text`], so sinks render it without quotes.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{Logger, Severity};
/// use logging_sink::{Channel, Record, RecordingSink};
///
/// let sink = Arc::new(RecordingSink::new());
/// let logger = Logger::with_sink(Arc::clone(&sink));
/// let ctx = logger.context("X");
///
/// logger.set_level(Severity::Error);
/// ctx.error(&[&"y"]);
/// ctx.warn(&[&"y"]);
///
/// assert_eq!(sink.drain(), [Record::new(Channel::Error, ["X", "\"y\""])]);
/// ```
pub struct Context<'a, S = StdioSink> {
    prefix: String,
    logger: &'a Logger<S>,
}

impl<'a, S> Context<'a, S> {
    /// Binds `prefix` to `logger`.
    #[must_use]
    pub fn new(prefix: impl Into<String>, logger: &'a Logger<S>) -> Self {
        Self {
            prefix: prefix.into(),
            logger,
        }
    }

    /// Returns the prefix forwarded ahead of every call's arguments.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the wrapped logger.
    #[must_use]
    pub const fn logger(&self) -> &'a Logger<S> {
        self.logger
    }
}

impl<S: Sink> Context<'_, S> {
    /// Forwards `[prefix, args...]` through [`Logger::error`].
    pub fn error(&self, args: &[Argument<'_>]) {
        self.log(Severity::Error, args);
    }

    /// Forwards `[prefix, args...]` through [`Logger::warn`].
    pub fn warn(&self, args: &[Argument<'_>]) {
        self.log(Severity::Warn, args);
    }

    /// Forwards `[prefix, args...]` through [`Logger::info`].
    pub fn info(&self, args: &[Argument<'_>]) {
        self.log(Severity::Info, args);
    }

    /// Forwards `[prefix, args...]` through [`Logger::debug`].
    pub fn debug(&self, args: &[Argument<'_>]) {
        self.log(Severity::Debug, args);
    }

    /// Forwards `[prefix, args...]` through [`Logger::log`].
    pub fn log(&self, severity: Severity, args: &[Argument<'_>]) {
        // Skip building the prefixed list for calls the logger would drop.
        if !self.logger.is_enabled(severity) {
            return;
        }
        let prefix = Text(self.prefix.as_str());
        let mut forwarded: Vec<Argument<'_>> = Vec::with_capacity(args.len() + 1);
        forwarded.push(&prefix);
        forwarded.extend_from_slice(args);
        self.logger.log(severity, &forwarded);
    }
}

impl<S> Clone for Context<'_, S> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            logger: self.logger,
        }
    }
}

impl<S> fmt::Debug for Context<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("prefix", &self.prefix)
            .field("logger", self.logger)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging_sink::{Channel, Record, RecordingSink};

    fn recording() -> Logger<RecordingSink> {
        Logger::with_sink(RecordingSink::new())
    }

    #[test]
    fn prefix_comes_first_on_every_channel() {
        let logger = recording().with_level(Severity::Debug);
        let ctx = logger.context("ctx");

        ctx.error(&[&1]);
        ctx.warn(&[&2]);
        ctx.info(&[&3]);
        ctx.debug(&[&4]);

        assert_eq!(
            logger.sink().drain(),
            [
                Record::new(Channel::Error, ["ctx", "1"]),
                Record::new(Channel::Warn, ["ctx", "2"]),
                Record::new(Channel::Info, ["ctx", "3"]),
                Record::new(Channel::Debug, ["ctx", "4"]),
            ]
        );
    }

    #[test]
    fn no_argument_call_forwards_only_prefix() {
        let logger = recording().with_level(Severity::Error);
        logger.context("only").error(&[]);
        assert_eq!(
            logger.sink().drain(),
            [Record::new(Channel::Error, ["only"])]
        );
    }

    #[test]
    fn follows_the_live_logger_threshold() {
        let logger = recording();
        let ctx = logger.context("p");

        ctx.error(&[]);
        assert!(logger.sink().is_empty());

        logger.set_level(Severity::Warn);
        ctx.warn(&[]);
        ctx.info(&[]);
        assert_eq!(logger.sink().drain().len(), 1);

        logger.set_level(Severity::Off);
        ctx.error(&[]);
        assert!(logger.sink().is_empty());
    }

    #[test]
    fn contexts_on_one_logger_are_independent() {
        let logger = recording().with_level(Severity::Info);
        let first = logger.context("first");
        let second = logger.context("second");

        first.info(&[&"a"]);
        second.info(&[&"b"]);
        logger.info(&[&"c"]);

        let records = logger.sink().drain();
        assert_eq!(records[0].arguments, ["first", "\"a\""]);
        assert_eq!(records[1].arguments, ["second", "\"b\""]);
        assert_eq!(records[2].arguments, ["\"c\""]);
    }

    #[test]
    fn off_severity_is_never_forwarded() {
        let logger = recording().with_level(Severity::Debug);
        logger.context("p").log(Severity::Off, &[&1]);
        assert!(logger.sink().is_empty());
    }

    #[test]
    fn accessors_and_clone() {
        let logger = recording();
        let ctx = logger.context(String::from("svc"));
        let copy = ctx.clone();

        assert_eq!(copy.prefix(), "svc");
        assert!(std::ptr::eq(copy.logger(), &logger));
        assert!(format!("{ctx:?}").contains("svc"));
    }
}
