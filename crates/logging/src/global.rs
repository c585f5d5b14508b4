//! crates/logging/src/global.rs
//! Process-wide logger instance.

use std::sync::OnceLock;

use crate::logger::Logger;

/// Returns the process-wide logger, creating it on first use.
///
/// The instance writes to standard output and standard error and starts
/// [`Severity::Off`](crate::Severity::Off). It is created once and never
/// replaced; test harnesses that share it can return it to the initial state
/// with [`Logger::reset`]. Code that can receive a logger explicitly should
/// prefer that over this accessor.
///
/// # Examples
///
/// ```
/// use logging::{Severity, global};
///
/// global().set_level(Severity::Error);
/// assert_eq!(global().level(), Severity::Error);
/// global().reset();
/// ```
pub fn global() -> &'static Logger {
    static GLOBAL: OnceLock<Logger> = OnceLock::new();
    GLOBAL.get_or_init(Logger::new)
}
