//! Labels identifying resources created by a deployment run.
//!
//! A [`Labeller`] produces a fixed label set (managed-by marker plus run id)
//! and renders it in the two forms consumers need: a map for attaching to
//! resources, and literal `key=value` strings for building selectors.
use std::sync::Arc;

use runlabel_model::Labels;

mod default;
pub use default::DefaultLabeller;

/// Source of identifying labels for managed resources.
pub trait Labeller: Send + Sync {
    /// Labels to attach to every resource created by this run.
    fn labels(&self) -> Labels;

    /// Run id label rendered as `key=value`.
    fn run_id_key_value_string(&self) -> String;

    /// Managed-by label rendered as `key=value`.
    fn k8s_managed_by_label_key_value_string(&self) -> String;
}

/// Shared handle to a labeller.
pub type LabellerHandle = Arc<dyn Labeller>;

impl<L: Labeller + ?Sized> Labeller for &L {
    fn labels(&self) -> Labels {
        (**self).labels()
    }

    fn run_id_key_value_string(&self) -> String {
        (**self).run_id_key_value_string()
    }

    fn k8s_managed_by_label_key_value_string(&self) -> String {
        (**self).k8s_managed_by_label_key_value_string()
    }
}

impl<L: Labeller + ?Sized> Labeller for Box<L> {
    fn labels(&self) -> Labels {
        (**self).labels()
    }

    fn run_id_key_value_string(&self) -> String {
        (**self).run_id_key_value_string()
    }

    fn k8s_managed_by_label_key_value_string(&self) -> String {
        (**self).k8s_managed_by_label_key_value_string()
    }
}

impl<L: Labeller + ?Sized> Labeller for Arc<L> {
    fn labels(&self) -> Labels {
        (**self).labels()
    }

    fn run_id_key_value_string(&self) -> String {
        (**self).run_id_key_value_string()
    }

    fn k8s_managed_by_label_key_value_string(&self) -> String {
        (**self).k8s_managed_by_label_key_value_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use runlabel_model::{RunId, RUN_ID_LABEL_KEY};

    use super::*;
    use crate::{FixedRunId, StaticVersion};

    fn sample() -> DefaultLabeller {
        DefaultLabeller::with_sources(
            "1.2.3",
            &StaticVersion::default(),
            &FixedRunId(RunId::new_v4()),
        )
    }

    fn render(l: &dyn Labeller) -> (Labels, String, String) {
        (
            l.labels(),
            l.run_id_key_value_string(),
            l.k8s_managed_by_label_key_value_string(),
        )
    }

    #[test]
    fn handle_delegates_to_inner() {
        let inner = sample();
        let handle: LabellerHandle = Arc::new(inner.clone());

        assert_eq!(render(&handle), render(&inner));
        assert_eq!(
            handle.labels().get(RUN_ID_LABEL_KEY),
            Some(inner.run_id().to_string().as_str())
        );
    }

    #[test]
    fn boxed_and_borrowed_delegate_to_inner() {
        let inner = sample();
        let boxed: Box<dyn Labeller> = Box::new(inner.clone());
        let borrowed = &inner;

        assert_eq!(render(&boxed), render(&inner));
        assert_eq!(render(&borrowed), render(&inner));
    }
}
