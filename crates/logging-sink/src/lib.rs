#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output side of the levelog facade. A [`Sink`]
//! exposes one function per [`Channel`] (error, warn, info, debug) and accepts
//! an ordered list of opaque [`Argument`] references. The `logging` crate
//! decides *whether* a call reaches a sink; this crate decides *where* it goes.
//!
//! # Design
//!
//! - [`ConsoleSink`] renders each call as one line into a pair of writers,
//!   routing `error`/`warn` to the error writer and `info`/`debug` to the
//!   output writer. [`StdioSink`] binds it to the process streams.
//! - [`RecordingSink`] captures every call in memory so tests and embedders
//!   can inspect exactly what was forwarded.
//! - `TracingSink` (feature `tracing`) re-emits calls as `tracing` events.
//!
//! Blanket implementations of [`Sink`] for `&S`, `Box<S>` and `Arc<S>` let a
//! single sink be shared between a logger and an observer.
//!
//! # Invariants
//!
//! - Arguments are forwarded by reference: the sink receives the caller's
//!   values in their original order and is free to inspect them through
//!   [`std::fmt::Debug`]. [`Text`] marks an argument as plain text.
//! - Sink methods return nothing. The console sink drops write failures so a
//!   logging call never becomes the cause of a caller-visible error.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{Channel, RecordingSink, Sink};
//!
//! let sink = RecordingSink::new();
//! sink.warn(&[&"disk almost full", &93u8]);
//!
//! let records = sink.drain();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].channel, Channel::Warn);
//! assert_eq!(records[0].arguments, ["\"disk almost full\"", "93"]);
//! ```
//!
//! # See also
//!
//! - `logging` crate for severity thresholds, loggers, and contexts.

mod argument;
mod channel;
mod line_mode;
mod sink;

pub use argument::{Argument, Text, render_arguments};
pub use channel::Channel;
pub use line_mode::LineMode;
pub use sink::{ConsoleSink, Record, RecordingSink, Sink, StdioSink};

#[cfg(feature = "tracing")]
pub use sink::TracingSink;
