//! Sources of the run identifier stamped on every label set.
//!
//! All labellers in one process must agree on the run id, so the default
//! source is a process-wide value created on first use. Callers that need a
//! specific id (tests, embedders resuming a run) inject a [`FixedRunId`].
use std::sync::OnceLock;

use runlabel_model::RunId;
use tracing::debug;

/// Process-wide run id.
///
/// Written at most once; lives until the process exits.
static PROCESS_RUN_ID: OnceLock<RunId> = OnceLock::new();

/// Supplies the run id for newly built labellers.
pub trait RunIdSource: Send + Sync {
    fn run_id(&self) -> RunId;
}

/// Returns the run id of the current process, generating it on first call.
///
/// Concurrent first callers block until the single generation completes and
/// all observe the same value.
pub fn process_run_id() -> RunId {
    init_run_id(&PROCESS_RUN_ID)
}

fn init_run_id(cell: &OnceLock<RunId>) -> RunId {
    *cell.get_or_init(|| {
        let id = RunId::new_v4();
        debug!(run_id = %id, "generated process run id");
        id
    })
}

/// [`RunIdSource`] backed by [`process_run_id`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunId;

impl RunIdSource for ProcessRunId {
    #[inline]
    fn run_id(&self) -> RunId {
        process_run_id()
    }
}

/// [`RunIdSource`] that always returns the id it was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRunId(pub RunId);

impl RunIdSource for FixedRunId {
    #[inline]
    fn run_id(&self) -> RunId {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn process_run_id_is_stable() {
        let first = process_run_id();
        let second = process_run_id();
        assert_eq!(first, second);
        assert_eq!(ProcessRunId.run_id(), first);
        assert_eq!(first.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn process_run_id_is_shared_across_threads() {
        let ids: Vec<RunId> = thread::scope(|s| {
            let handles: Vec<_> = (0..32).map(|_| s.spawn(process_run_id)).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let expected = process_run_id();
        assert!(ids.iter().all(|id| *id == expected));
    }

    // PROCESS_RUN_ID may already be set by other tests, so race a fresh cell instead.
    #[test]
    fn first_initialization_race_yields_one_id() {
        let cell = OnceLock::new();
        let ids: Vec<RunId> = thread::scope(|s| {
            let handles: Vec<_> = (0..100).map(|_| s.spawn(|| init_run_id(&cell))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let stored = *cell.get().unwrap();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| *id == stored));
    }

    #[test]
    fn fixed_source_returns_its_id() {
        let id = RunId::new_v4();
        let source = FixedRunId(id);
        assert_eq!(source.run_id(), id);
        assert_eq!(source.run_id(), id);
    }
}
