//! Pod inspection subsystem.
//!
//! # Data Flow
//! ```text
//! lister.rs  → Vec<Pod> snapshot (Kubernetes API or test double)
//! readiness.rs → is this pod eligible?
//! port.rs    → which host:port does a matched pod advertise?
//! ```
//!
//! # Design Decisions
//! - Works directly on `k8s_openapi` pod objects, no intermediate model
//! - Readiness and port resolution are pure functions of one pod

pub mod lister;
pub mod port;
pub mod readiness;

pub use lister::{KubePodLister, ListError, PodLister};
pub use port::{pod_address, resolve_port, DEFAULT_DRIVER_PORT, RUN_CONTAINER_NAME};
pub use readiness::is_ready;

use k8s_openapi::api::core::v1::Pod;

use crate::selector::Labels;

static NO_LABELS: Labels = Labels::new();

/// The pod's labels, or an empty set when it carries none.
pub fn labels_of(pod: &Pod) -> &Labels {
    pod.metadata.labels.as_ref().unwrap_or(&NO_LABELS)
}

/// The pod's name for logging, or `"<unnamed>"`.
pub fn name_of(pod: &Pod) -> &str {
    pod.metadata.name.as_deref().unwrap_or("<unnamed>")
}
