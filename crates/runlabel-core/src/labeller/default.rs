use runlabel_model::{
    K8S_MANAGED_BY_LABEL_KEY, KeyValue, Labels, MANAGED_BY_PREFIX, RUN_ID_LABEL_KEY, RunId,
    UNKNOWN_VERSION,
};
use serde::Serialize;
use tracing::debug;

use crate::{
    labeller::Labeller,
    run_id::{ProcessRunId, RunIdSource},
    version::{BuildVersion, VersionProvider},
};

/// Labeller adding a Kubernetes-style managed-by label and the run id label.
///
/// Immutable after construction; clone freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultLabeller {
    version: String,
    run_id: RunId,
}

impl DefaultLabeller {
    /// Build a labeller for the current process.
    ///
    /// Uses the process-wide run id and falls back to the build version when
    /// `version_override` is empty.
    pub fn new(version_override: &str) -> Self {
        Self::with_sources(version_override, &BuildVersion, &ProcessRunId)
    }

    /// Build a labeller with explicit version and run id sources.
    ///
    /// Version resolution: non-empty `version_override`, then the provider's
    /// version, then [`UNKNOWN_VERSION`].
    pub fn with_sources(
        version_override: &str,
        versions: &dyn VersionProvider,
        run_ids: &dyn RunIdSource,
    ) -> Self {
        let version = if !version_override.is_empty() {
            version_override.to_string()
        } else {
            let reported = versions.get().version;
            if reported.is_empty() {
                debug!("no version reported, using {UNKNOWN_VERSION:?}");
                UNKNOWN_VERSION.to_string()
            } else {
                reported
            }
        };

        Self {
            version,
            run_id: run_ids.run_id(),
        }
    }

    /// Resolved tool version; never empty.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Selector matching every resource labelled during this run.
    pub fn run_id_selector(&self) -> String {
        self.run_id_key_value_string()
    }

    /// Selector matching the full label set.
    pub fn selector(&self) -> String {
        self.labels().selector()
    }

    /// Value of the managed-by label, shared by every rendering of it.
    fn managed_by_value(&self) -> String {
        format!("{MANAGED_BY_PREFIX}{}", self.version)
    }

    fn managed_by(&self) -> KeyValue {
        KeyValue::new(K8S_MANAGED_BY_LABEL_KEY, self.managed_by_value())
    }

    fn run_id_label(&self) -> KeyValue {
        KeyValue::new(RUN_ID_LABEL_KEY, self.run_id.to_string())
    }
}

impl Labeller for DefaultLabeller {
    fn labels(&self) -> Labels {
        [self.managed_by(), self.run_id_label()]
            .into_iter()
            .map(KeyValue::into_parts)
            .collect()
    }

    fn run_id_key_value_string(&self) -> String {
        self.run_id_label().to_string()
    }

    fn k8s_managed_by_label_key_value_string(&self) -> String {
        self.managed_by().to_string()
    }
}
