//! crates/logging/src/logger.rs
//! Threshold-filtering logger over a sink.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use logging_sink::{Argument, Channel, Sink, StdioSink};

use crate::config::LoggerConfig;
use crate::context::Context;
use crate::levels::Severity;

/// Leveled logger that forwards calls at or above its threshold to a [`Sink`].
///
/// A fresh logger is [`Severity::Off`]: nothing is forwarded until
/// [`set_level`](Self::set_level) picks a visible threshold. The four emit
/// methods pass their arguments to the sink function of the same name,
/// unchanged and in order. No method fails or panics.
///
/// # Consistency
///
/// The threshold is a single atomic byte accessed with relaxed ordering. When
/// one thread changes the level while others log, a concurrent call may
/// observe either the old or the new threshold. Level changes are advisory and
/// typically happen once at startup, so no stronger ordering is provided.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{Logger, Severity};
/// use logging_sink::{Channel, RecordingSink};
///
/// let sink = Arc::new(RecordingSink::new());
/// let logger = Logger::with_sink(Arc::clone(&sink));
///
/// logger.set_level(Severity::Warn);
/// logger.error(&[&"disk failed"]);
/// logger.info(&[&"ignored"]);
///
/// let records = sink.drain();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].channel, Channel::Error);
/// ```
pub struct Logger<S = StdioSink> {
    level: AtomicU8,
    sink: S,
}

impl Logger {
    /// Creates a logger that writes to standard output and standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(StdioSink::stdio())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Logger<S> {
    /// Creates a logger over `sink`, initially [`Severity::Off`].
    #[must_use]
    pub const fn with_sink(sink: S) -> Self {
        Self {
            level: AtomicU8::new(Severity::Off.rank()),
            sink,
        }
    }

    /// Sets the threshold while building the logger.
    #[must_use]
    pub fn with_level(self, level: Severity) -> Self {
        self.store(level);
        self
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn level(&self) -> Severity {
        Severity::from_rank(self.level.load(Ordering::Relaxed)).unwrap_or(Severity::Off)
    }

    /// Reports whether a call of `severity` would currently be forwarded.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.level().permits(severity)
    }

    /// Returns the logger to [`Severity::Off`] without emitting anything.
    ///
    /// Intended for test harnesses that share one logger between cases.
    pub fn reset(&self) {
        self.store(Severity::Off);
    }

    /// Borrows the sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the logger and returns its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Creates a [`Context`] that prefixes every call with `prefix`.
    ///
    /// The context borrows this logger and shares its threshold; any number of
    /// contexts may be created.
    #[must_use]
    pub fn context(&self, prefix: impl Into<String>) -> Context<'_, S> {
        Context::new(prefix, self)
    }

    fn store(&self, level: Severity) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }
}

impl<S: Sink> Logger<S> {
    /// Creates a logger over `sink` and applies `config` to it.
    pub fn from_config(config: &LoggerConfig, sink: S) -> Self {
        let logger = Self::with_sink(sink);
        logger.configure(config);
        logger
    }

    /// Applies the level named by `config`, with the same fallback as [`set_level`](Self::set_level).
    pub fn configure(&self, config: &LoggerConfig) {
        self.set_level(config.level.as_str());
    }

    /// Changes the threshold.
    ///
    /// Accepts a [`Severity`] or anything convertible to one, such as a rank
    /// (`3`) or a name (`"warn"`). A value that does not name a severity turns
    /// the logger off and sends a diagnostic to the sink's `warn` function;
    /// the diagnostic is delivered regardless of the threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use logging::{Logger, Severity};
    /// use logging_sink::RecordingSink;
    ///
    /// let sink = Arc::new(RecordingSink::new());
    /// let logger = Logger::with_sink(Arc::clone(&sink));
    ///
    /// logger.set_level("info");
    /// assert_eq!(logger.level(), Severity::Info);
    ///
    /// logger.set_level(999);
    /// assert_eq!(logger.level(), Severity::Off);
    /// assert_eq!(sink.len(), 1);
    /// ```
    pub fn set_level<L>(&self, level: L)
    where
        L: TryInto<Severity>,
        L::Error: fmt::Display,
    {
        let _ = self.try_set_level(level);
    }

    /// Changes the threshold like [`set_level`](Self::set_level) and reports whether the value was accepted.
    ///
    /// The fallback to [`Severity::Off`] and the diagnostic happen before the
    /// error is returned.
    pub fn try_set_level<L>(&self, level: L) -> Result<(), L::Error>
    where
        L: TryInto<Severity>,
        L::Error: fmt::Display,
    {
        match level.try_into() {
            Ok(severity) => {
                self.store(severity);
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "levelog::logger", level = %severity, "log level set");
                Ok(())
            }
            Err(error) => {
                self.store(Severity::Off);
                self.sink
                    .warn(&[&format_args!("{error}; turning logging off")]);
                Err(error)
            }
        }
    }

    /// Forwards `args` to the sink's `error` function if the threshold allows [`Severity::Error`].
    pub fn error(&self, args: &[Argument<'_>]) {
        self.forward(Channel::Error, args);
    }

    /// Forwards `args` to the sink's `warn` function if the threshold allows [`Severity::Warn`].
    pub fn warn(&self, args: &[Argument<'_>]) {
        self.forward(Channel::Warn, args);
    }

    /// Forwards `args` to the sink's `info` function if the threshold allows [`Severity::Info`].
    pub fn info(&self, args: &[Argument<'_>]) {
        self.forward(Channel::Info, args);
    }

    /// Forwards `args` to the sink's `debug` function if the threshold allows [`Severity::Debug`].
    pub fn debug(&self, args: &[Argument<'_>]) {
        self.forward(Channel::Debug, args);
    }

    /// Forwards `args` on the channel for `severity`. [`Severity::Off`] is never forwarded.
    pub fn log(&self, severity: Severity, args: &[Argument<'_>]) {
        if let Some(channel) = severity.channel() {
            self.forward(channel, args);
        }
    }

    fn forward(&self, channel: Channel, args: &[Argument<'_>]) {
        if !self.is_enabled(Severity::from(channel)) {
            return;
        }
        match channel {
            Channel::Error => self.sink.error(args),
            Channel::Warn => self.sink.warn(args),
            Channel::Info => self.sink.info(args),
            Channel::Debug => self.sink.debug(args),
        }
    }
}

impl<S> fmt::Debug for Logger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}
