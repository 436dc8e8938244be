use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Build information reported by a version provider.
///
/// Only `version` feeds into labels; the rest is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// Display version, e.g. `2.3.0`. May be empty for unreleased builds.
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_commit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_date: Option<String>,
    /// `os/arch` of the running binary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl VersionInfo {
    /// Version-only record.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    /// Returns `true` if no version string is reported.
    pub fn is_empty(&self) -> bool {
        self.version.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::VersionInfo;

    #[test]
    fn empty_when_version_missing() {
        assert!(VersionInfo::default().is_empty());
        assert!(!VersionInfo::new("1.2.3").is_empty());
    }

    #[test]
    fn serde_skips_missing_extras() {
        let info = VersionInfo::new("1.2.3");
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"version":"1.2.3"}"#);

        let full: VersionInfo = serde_json::from_str(
            r#"{"version":"1.2.3","gitCommit":"deadbeef","platform":"linux/x86_64"}"#,
        )
        .unwrap();
        assert_eq!(full.git_commit.as_deref(), Some("deadbeef"));
        assert_eq!(full.platform.as_deref(), Some("linux/x86_64"));
        assert!(full.build_date.is_none());
    }
}
