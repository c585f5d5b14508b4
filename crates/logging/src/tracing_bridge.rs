//! crates/logging/src/tracing_bridge.rs
//! Bridge between [`Severity`] thresholds and the tracing ecosystem.
//!
//! Pair a [`Logger`](crate::Logger) over a [`TracingSink`](logging_sink::TracingSink)
//! with a subscriber installed by [`init_tracing`] to route leveled calls into
//! `tracing-subscriber`'s formatting layer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{Logger, Severity, init_tracing};
//! use logging_sink::TracingSink;
//!
//! init_tracing(Severity::Info)?;
//! let logger = Logger::with_sink(TracingSink::new()).with_level(Severity::Info);
//! logger.info(&[&format_args!("service started")]);
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::levels::Severity;

/// Error returned when a global tracing subscriber is already installed.
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct InitTracingError(#[from] TryInitError);

impl From<Severity> for LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Off => Self::OFF,
            Severity::Debug => Self::DEBUG,
            Severity::Info => Self::INFO,
            Severity::Warn => Self::WARN,
            Severity::Error => Self::ERROR,
        }
    }
}

/// Installs a global `fmt` subscriber whose maximum level matches `threshold`.
pub fn init_tracing(threshold: Severity) -> Result<(), InitTracingError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(LevelFilter::from(threshold))
        .try_init()?;
    Ok(())
}

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`, falling back to `default`.
pub fn init_tracing_from_env(default: Severity) -> Result<(), InitTracingError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(default).into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()?;
    Ok(())
}
