#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Leveled logging facade.
//!
//! `levelog` bundles the [`logging`] crate (severity thresholds, loggers and
//! prefixing contexts) with the [`sink`] collaborators that perform the actual
//! output. Most programs only need this crate:
//!
//! ```
//! use levelog::{Logger, Severity, log_info};
//!
//! let logger = Logger::new();
//! logger.set_level(Severity::Info);
//!
//! let http = logger.context("http");
//! log_info!(http, format_args!("listening on {}", 8080));
//! log_info!(http, levelog::Text("ready"));
//! ```

pub use logging::{
    Context, LEVEL_ENV, Logger, LoggerConfig, ParseSeverityError, Severity, global, log_debug,
    log_error, log_info, log_warn,
};

#[cfg(feature = "tracing")]
pub use logging::{InitTracingError, init_tracing, init_tracing_from_env};

pub use logging_sink::Text;

/// Sink collaborators: console, recording, and tracing outputs.
pub mod sink {
    pub use logging_sink::*;
}
