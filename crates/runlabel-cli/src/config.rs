//! Configuration file for the `runlabel` command.
use std::path::Path;

use runlabel_observe::LoggerConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Settings loaded from `--config`; command-line flags take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CliConfig {
    pub logger: LoggerConfig,
    /// Version to report instead of the build version.
    pub version_override: Option<String>,
}

impl CliConfig {
    /// Load from `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            CliError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        let config = serde_json::from_str(&raw).map_err(|err| {
            CliError::Config(format!("failed to parse {}: {err}", path.display()))
        })?;
        debug!(?path, "loaded config");
        Ok(config)
    }
}
