use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` expression, e.g. `"info"` or `"runlabel_core=debug,warn"`.
///
/// Stored as the original string so it round-trips through config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the filter; cannot fail since the expression was validated on construction.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.0).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(Self(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_valid_levels() {
        for lvl in ["info", "warn", "trace", "runlabel_core=debug,info"] {
            let parsed = lvl.parse::<LoggerLevel>();
            assert!(parsed.is_ok(), "expected valid level {lvl}, got {parsed:?}");
            let _ = parsed.unwrap().to_env_filter();
        }
    }

    #[test]
    fn rejects_invalid_levels() {
        for lvl in ["runlabel_core=loud", "a=trace,b=wat"] {
            assert!(lvl.parse::<LoggerLevel>().is_err(), "expected error for {lvl}");
        }
    }

    #[test]
    fn default_is_info() {
        assert_eq!(LoggerLevel::default().as_str(), "info");
        assert_eq!(LoggerLevel::new("info").unwrap(), LoggerLevel::default());
    }

    #[test]
    fn serde_is_a_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.as_str(), "debug");
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""debug""#);
    }
}
