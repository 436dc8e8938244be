mod domain;
pub use domain::{K8S_MANAGED_BY_LABEL_KEY, MANAGED_BY_PREFIX, RUN_ID_LABEL_KEY, UNKNOWN_VERSION};
pub use domain::{KeyValue, Labels, RunId};

mod error;
pub use error::{ModelError, ModelResult};

mod version;
pub use version::VersionInfo;
