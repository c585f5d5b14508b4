//! crates/logging/src/macros.rs
//! Variadic call sugar for loggers and contexts.
//!
//! Each macro takes a target (a [`Logger`](crate::Logger), a
//! [`Context`](crate::Context), or a reference to either) followed by any
//! number of arguments, and forwards them by reference to the method of the
//! same level.

/// Forwards the arguments to the target's `error` method.
///
/// # Example
/// ```
/// use logging::{Logger, Severity, log_error};
/// use logging_sink::RecordingSink;
///
/// let logger = Logger::with_sink(RecordingSink::new()).with_level(Severity::Error);
/// let code = 23;
/// log_error!(logger, "partial transfer", code);
/// assert_eq!(logger.sink().drain()[0].arguments, ["\"partial transfer\"", "23"]);
/// ```
#[macro_export]
macro_rules! log_error {
    ($target:expr $(, $arg:expr)* $(,)?) => {
        $target.error(&[$(&$arg as &dyn ::core::fmt::Debug),*])
    };
}

/// Forwards the arguments to the target's `warn` method.
///
/// # Example
/// ```ignore
/// log_warn!(logger, "retrying", attempt);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($target:expr $(, $arg:expr)* $(,)?) => {
        $target.warn(&[$(&$arg as &dyn ::core::fmt::Debug),*])
    };
}

/// Forwards the arguments to the target's `info` method.
///
/// # Example
/// ```ignore
/// log_info!(ctx, format_args!("listening on {addr}"));
/// ```
#[macro_export]
macro_rules! log_info {
    ($target:expr $(, $arg:expr)* $(,)?) => {
        $target.info(&[$(&$arg as &dyn ::core::fmt::Debug),*])
    };
}

/// Forwards the arguments to the target's `debug` method.
///
/// # Example
/// ```ignore
/// log_debug!(logger, "state", &state);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($target:expr $(, $arg:expr)* $(,)?) => {
        $target.debug(&[$(&$arg as &dyn ::core::fmt::Debug),*])
    };
}
