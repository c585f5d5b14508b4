use std::fmt;

/// Names one of the four emit functions a [`Sink`](crate::Sink) exposes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Channel {
    /// Failures that need attention.
    #[doc(alias = "console.error")]
    Error,
    /// Conditions that are suspicious but recoverable.
    #[doc(alias = "console.warn")]
    Warn,
    /// Progress and lifecycle notices.
    #[doc(alias = "console.info")]
    Info,
    /// Developer-facing detail.
    #[doc(alias = "console.debug")]
    Debug,
}

impl Channel {
    /// Every channel, most severe first.
    pub const ALL: [Self; 4] = [Self::Error, Self::Warn, Self::Info, Self::Debug];

    /// Returns the lowercase name of the channel.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Reports whether the channel is routed to the error stream by console sinks.
    #[must_use]
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Self::Error | Self::Warn)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
