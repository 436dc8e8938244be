mod kv;
pub use kv::KeyValue;

mod labels;
pub use labels::Labels;

mod run_id;
pub use run_id::RunId;

mod constants;
pub use constants::{K8S_MANAGED_BY_LABEL_KEY, MANAGED_BY_PREFIX, RUN_ID_LABEL_KEY, UNKNOWN_VERSION};
