//! Bridge from sink calls to `tracing` events.

use super::Sink;
use crate::argument::{Argument, render_arguments};
use crate::channel::Channel;

/// Sink that re-emits each call as a `tracing` event.
///
/// The channel selects the event level (`error!`, `warn!`, `info!`, `debug!`)
/// and the rendered arguments become the event message. Events use the
/// `levelog` target so subscribers can filter them with directives such as
/// `levelog=warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the bridge.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn emit(&self, channel: Channel, args: &[Argument<'_>]) {
        let message = render_arguments(args);
        match channel {
            Channel::Error => ::tracing::error!(target: "levelog", "{message}"),
            Channel::Warn => ::tracing::warn!(target: "levelog", "{message}"),
            Channel::Info => ::tracing::info!(target: "levelog", "{message}"),
            Channel::Debug => ::tracing::debug!(target: "levelog", "{message}"),
        }
    }
}
