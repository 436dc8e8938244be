//! Providers of the tool version used in the managed-by label.
use runlabel_model::VersionInfo;

/// Build version, injected at compile time (e.g. `RUNLABEL_VERSION=2.3.0 cargo build`).
const BUILD_VERSION: Option<&str> = option_env!("RUNLABEL_VERSION");
const BUILD_GIT_COMMIT: Option<&str> = option_env!("RUNLABEL_GIT_COMMIT");
const BUILD_DATE: Option<&str> = option_env!("RUNLABEL_BUILD_DATE");

/// Reports information about the running build.
///
/// Implementations never fail: an unavailable version is reported as an empty string.
pub trait VersionProvider: Send + Sync {
    fn get(&self) -> VersionInfo;
}

/// [`VersionProvider`] reading values baked in at build time.
///
/// Builds without `RUNLABEL_VERSION` report an empty version.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildVersion;

impl VersionProvider for BuildVersion {
    fn get(&self) -> VersionInfo {
        VersionInfo {
            version: BUILD_VERSION.unwrap_or_default().to_string(),
            git_commit: BUILD_GIT_COMMIT.map(str::to_string),
            build_date: BUILD_DATE.map(str::to_string),
            platform: Some(format!(
                "{}/{}",
                std::env::consts::OS,
                std::env::consts::ARCH
            )),
        }
    }
}

/// [`VersionProvider`] returning a fixed record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticVersion(pub VersionInfo);

impl StaticVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(VersionInfo::new(version))
    }
}

impl VersionProvider for StaticVersion {
    fn get(&self) -> VersionInfo {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_version_reflects_compile_env() {
        let info = BuildVersion.get();
        assert_eq!(info.version, BUILD_VERSION.unwrap_or_default());
        assert_eq!(info.git_commit.as_deref(), BUILD_GIT_COMMIT);

        let platform = info.platform.unwrap();
        assert!(platform.starts_with(std::env::consts::OS));
        assert!(platform.ends_with(std::env::consts::ARCH));
    }

    #[test]
    fn static_version_returns_its_record() {
        let provider = StaticVersion::new("1.2.3");
        assert_eq!(provider.get().version, "1.2.3");
        assert!(StaticVersion::default().get().is_empty());
    }
}
