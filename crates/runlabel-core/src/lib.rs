pub mod labeller;
pub mod run_id;
pub mod version;

pub use labeller::{DefaultLabeller, Labeller, LabellerHandle};
pub use run_id::{FixedRunId, ProcessRunId, RunIdSource, process_run_id};
pub use version::{BuildVersion, StaticVersion, VersionProvider};

pub mod prelude {
    pub use crate::labeller::{DefaultLabeller, Labeller};
    pub use crate::run_id::RunIdSource;
    pub use crate::version::VersionProvider;
}
