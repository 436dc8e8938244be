use std::{fmt, str::FromStr, sync::OnceLock};

use serde::{Deserialize, Serialize};
use time::UtcOffset;

use crate::logger::LoggerError;

/// Local UTC offset, detected once per process.
static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Timezone of log timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    /// System timezone; falls back to UTC if detection fails.
    Local,
}

impl LoggerTimeZone {
    pub(crate) fn offset(self) -> UtcOffset {
        match self {
            Self::Utc => UtcOffset::UTC,
            Self::Local => local_offset(),
        }
    }
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Utc => "utc",
            Self::Local => "local",
        })
    }
}

/// Detects and caches the local offset.
///
/// Call from `main()` before spawning threads: most Unix platforms refuse
/// offset detection once the process is multi-threaded.
pub fn init_local_offset() {
    let _ = local_offset();
}

fn local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}
