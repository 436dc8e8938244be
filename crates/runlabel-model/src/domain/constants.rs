//! Well-known label keys and values.
//!
//! Downstream tooling filters resources by these exact strings,
//! so they must never change.

/// Kubernetes recommended label naming the tool that manages a resource.
///
/// The value is always [`MANAGED_BY_PREFIX`] followed by the tool version,
/// e.g. `skaffold-2.3.0`.
pub const K8S_MANAGED_BY_LABEL_KEY: &str = "app.kubernetes.io/managed-by";

/// Label carrying the identifier of the run that created a resource.
///
/// The value is the process-wide run id.
pub const RUN_ID_LABEL_KEY: &str = "skaffold.dev/run-id";

/// Prefix of the managed-by label value.
pub const MANAGED_BY_PREFIX: &str = "skaffold-";

/// Version reported when neither the caller nor the build provides one.
pub const UNKNOWN_VERSION: &str = "unknown";
