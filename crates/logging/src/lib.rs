#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the filtering half of the levelog facade. A [`Logger`] owns a
//! [`Severity`] threshold and forwards `error`, `warn`, `info` and `debug`
//! calls to a [`Sink`](logging_sink::Sink) when the threshold allows them. A
//! [`Context`] decorates a borrowed logger with a fixed prefix that is
//! forwarded ahead of every call's arguments.
//!
//! # Design
//!
//! - Severities are ranked `Off < Debug < Info < Warn < Error`. A threshold is
//!   the minimum visible severity and `Off` suppresses everything.
//! - Arguments are opaque [`Argument`](logging_sink::Argument) references
//!   forwarded without copying, coercion, or reordering. The `log_*!` macros
//!   build the argument list from a variadic call.
//! - Contexts hold a reference to their logger rather than a threshold of
//!   their own, so every context sees level changes immediately.
//! - [`global`] offers a lazily created process-wide logger for programs that
//!   cannot pass one explicitly.
//!
//! # Invariants
//!
//! - A new logger is [`Severity::Off`].
//! - [`Logger::set_level`] is total: an unrecognised value turns the logger
//!   off and reports the rejected value through the sink's `warn` function.
//! - No emit method fails or panics on behalf of the caller.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{Logger, Severity, log_error, log_warn};
//! use logging_sink::{Channel, Record, RecordingSink};
//!
//! let sink = Arc::new(RecordingSink::new());
//! let logger = Logger::with_sink(Arc::clone(&sink));
//! logger.set_level(Severity::Error);
//!
//! let ctx = logger.context("X");
//! log_error!(ctx, "y");
//! log_warn!(ctx, "y");
//! log_error!(logger, "z");
//!
//! assert_eq!(
//!     sink.drain(),
//!     [
//!         Record::new(Channel::Error, ["X", "\"y\""]),
//!         Record::new(Channel::Error, ["\"z\""]),
//!     ]
//! );
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Severity`] and [`LoggerConfig`].
//! - `tracing`: `init_tracing`, `LevelFilter` conversion, and the
//!   `TracingSink` from `logging-sink`.

mod config;
mod context;
mod global;
mod levels;
mod logger;
mod macros;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{LEVEL_ENV, LoggerConfig};
pub use context::Context;
pub use global::global;
pub use levels::{ParseSeverityError, Severity};
pub use logger::Logger;

#[cfg(feature = "tracing")]
pub use tracing_bridge::{InitTracingError, init_tracing, init_tracing_from_env};
