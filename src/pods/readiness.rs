//! Pod readiness predicate.
//!
//! # Design Decisions
//! - Container statuses are the source of truth; pod phase is ignored
//! - A pod with no container statuses is not ready (kubelet has not reported yet)

use k8s_openapi::api::core::v1::Pod;

/// Returns true if the pod reports at least one container and all of them are ready.
pub fn is_ready(pod: &Pod) -> bool {
    let statuses = pod
        .status
        .as_ref()
        .and_then(|s| s.container_statuses.as_deref())
        .unwrap_or_default();

    !statuses.is_empty() && statuses.iter().all(|s| s.ready)
}
