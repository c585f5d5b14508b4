//! crates/logging/src/config.rs
//! Logger configuration and environment loading.

use std::ffi::OsStr;

use crate::levels::{ParseSeverityError, Severity};

/// Environment variable consulted by [`LoggerConfig::from_env`].
pub const LEVEL_ENV: &str = "LEVELOG_LEVEL";

/// Declarative logger settings.
///
/// The level is kept as text so that a misconfigured value reaches
/// [`Logger::configure`](crate::Logger::configure), which turns the logger off
/// and reports the rejected value, instead of failing while the configuration
/// is loaded.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LoggerConfig {
    /// Threshold name or rank, e.g. `"warn"` or `"3"`.
    pub level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::from(Severity::Off)
    }
}

impl From<Severity> for LoggerConfig {
    fn from(level: Severity) -> Self {
        Self::new(level.as_str())
    }
}

impl LoggerConfig {
    /// Creates a configuration with the given level text.
    #[must_use]
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }

    /// Loads the configuration from [`LEVEL_ENV`], defaulting to `off` when unset.
    ///
    /// A value that is not valid UTF-8 is kept in lossy form so that applying
    /// it still reports the rejected level.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var_os(key).map(|value| lossy_level(&value)))
    }

    /// Loads the configuration through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        lookup(LEVEL_ENV).map_or_else(Self::default, Self::new)
    }

    /// Parses the configured level strictly.
    pub fn severity(&self) -> Result<Severity, ParseSeverityError> {
        self.level.parse()
    }
}

fn lossy_level(value: &OsStr) -> String {
    value.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_off() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, "off");
        assert_eq!(config.severity(), Ok(Severity::Off));
    }

    #[test]
    fn env_lookup_reads_level_variable() {
        let config = LoggerConfig::from_env_with(|key| {
            assert_eq!(key, LEVEL_ENV);
            Some("Warn".to_owned())
        });
        assert_eq!(config.severity(), Ok(Severity::Warn));
    }

    #[test]
    fn missing_env_falls_back_to_default() {
        let config = LoggerConfig::from_env_with(|_| None);
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn invalid_level_is_kept_for_later_fallback() {
        let config = LoggerConfig::new("chatty");
        assert_eq!(config.level, "chatty");
        assert_eq!(config.severity().unwrap_err().input(), "chatty");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_env_value_reaches_the_fallback() {
        use std::os::unix::ffi::OsStrExt;

        use crate::Logger;
        use logging_sink::{Channel, RecordingSink};

        let raw = OsStr::from_bytes(b"in\xFFfo");
        let config = LoggerConfig::from_env_with(|_| Some(lossy_level(raw)));
        assert_eq!(config.level, "in\u{FFFD}fo");
        assert!(config.severity().is_err());

        let logger = Logger::with_sink(RecordingSink::new()).with_level(Severity::Info);
        logger.configure(&config);
        assert_eq!(logger.level(), Severity::Off);
        let records = logger.sink().drain();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].channel, Channel::Warn);
    }

    #[test]
    fn utf8_env_value_is_kept_verbatim() {
        assert_eq!(lossy_level(OsStr::new("debug")), "debug");
    }

    #[test]
    fn from_severity_uses_lowercase_name() {
        assert_eq!(LoggerConfig::from(Severity::Info).level, "info");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn config_json_roundtrip() {
            let config = LoggerConfig::from(Severity::Debug);
            let json = serde_json::to_string(&config).unwrap();
            assert_eq!(json, r#"{"level":"debug"}"#);

            let decoded: LoggerConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, config);
        }

        #[test]
        fn missing_level_defaults_to_off() {
            let decoded: LoggerConfig = serde_json::from_str("{}").unwrap();
            assert_eq!(decoded.level, "off");
        }

        #[test]
        fn severity_serializes_lowercase() {
            assert_eq!(serde_json::to_string(&Severity::Warn).unwrap(), "\"warn\"");
            let decoded: Severity = serde_json::from_str("\"error\"").unwrap();
            assert_eq!(decoded, Severity::Error);
        }
    }
}
