//! crates/logging/src/levels.rs
//! Severity ranks and their conversions.

use std::fmt;
use std::str::FromStr;

use logging_sink::Channel;
use thiserror::Error;

/// Ordered logging severity.
///
/// Ranks are fixed: `Off = 0`, `Debug = 1`, `Info = 2`, `Warn = 3`,
/// `Error = 4`. Used as a threshold, a severity is the *minimum visible*
/// rank; [`Severity::Off`] is a sentinel that suppresses everything.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Severity {
    /// Never emit.
    #[default]
    Off = 0,
    /// Developer-facing detail.
    Debug = 1,
    /// Progress and lifecycle notices.
    Info = 2,
    /// Suspicious but recoverable conditions.
    Warn = 3,
    /// Failures.
    Error = 4,
}

/// Error returned when a value does not name a [`Severity`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid log level \"{input}\"")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Creates an error recording the rejected value.
    #[must_use]
    pub fn new(input: impl fmt::Display) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// Returns the rejected value as text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Severity {
    /// Every severity in rank order, `Off` first.
    pub const ALL: [Self; 5] = [Self::Off, Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Returns the numeric rank.
    #[must_use]
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Looks up the severity with the given rank.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Off),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            _ => None,
        }
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Returns the sink channel that carries calls of this severity.
    ///
    /// `Off` has no channel.
    #[must_use]
    pub const fn channel(self) -> Option<Channel> {
        match self {
            Self::Off => None,
            Self::Debug => Some(Channel::Debug),
            Self::Info => Some(Channel::Info),
            Self::Warn => Some(Channel::Warn),
            Self::Error => Some(Channel::Error),
        }
    }

    /// Reports whether a call of severity `call` passes when `self` is the threshold.
    ///
    /// A threshold of `Off` rejects every call, including calls of severity
    /// `Off`; otherwise calls at or above the threshold pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert!(Severity::Warn.permits(Severity::Error));
    /// assert!(Severity::Warn.permits(Severity::Warn));
    /// assert!(!Severity::Warn.permits(Severity::Info));
    /// assert!(!Severity::Off.permits(Severity::Error));
    /// ```
    #[must_use]
    #[inline]
    pub const fn permits(self, call: Self) -> bool {
        !matches!(self, Self::Off) && self.rank() <= call.rank()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Accepts a name in any case (`warning` is an alias of `warn`) or a numeric rank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let parsed = match token.to_ascii_lowercase().as_str() {
            "off" => Some(Self::Off),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            other => other.parse::<u8>().ok().and_then(Self::from_rank),
        };
        parsed.ok_or_else(|| ParseSeverityError::new(s))
    }
}

impl From<Channel> for Severity {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Error => Self::Error,
            Channel::Warn => Self::Warn,
            Channel::Info => Self::Info,
            Channel::Debug => Self::Debug,
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.rank()
    }
}

impl TryFrom<&str> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: &str) -> Result<Self, ParseSeverityError> {
        value.parse()
    }
}

impl TryFrom<String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: String) -> Result<Self, ParseSeverityError> {
        value.parse()
    }
}

impl TryFrom<&String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: &String) -> Result<Self, ParseSeverityError> {
        value.parse()
    }
}

macro_rules! severity_from_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl TryFrom<$int> for Severity {
                type Error = ParseSeverityError;

                fn try_from(value: $int) -> Result<Self, ParseSeverityError> {
                    u8::try_from(value)
                        .ok()
                        .and_then(Self::from_rank)
                        .ok_or_else(|| ParseSeverityError::new(value))
                }
            }
        )*
    };
}

severity_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
