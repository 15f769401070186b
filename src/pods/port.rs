//! Advertised port resolution.
//!
//! # Responsibilities
//! - Find the well-known run container in a pod spec
//! - Advertise its first declared container port
//! - Fall back to the default driver port otherwise
//!
//! # Design Decisions
//! - Never fails: a container without ports is a normal configuration

use k8s_openapi::api::core::v1::Pod;

/// Name of the container whose first declared port is advertised.
pub const RUN_CONTAINER_NAME: &str = "main";

/// Port advertised when the run container declares none.
pub const DEFAULT_DRIVER_PORT: i32 = 10000;

/// Resolve the port to advertise for a matched pod.
pub fn resolve_port(pod: &Pod) -> i32 {
    pod.spec
        .as_ref()
        .and_then(|spec| spec.containers.iter().find(|c| c.name == RUN_CONTAINER_NAME))
        .and_then(|container| container.ports.as_ref())
        .and_then(|ports| ports.first())
        .map(|port| port.container_port)
        .unwrap_or(DEFAULT_DRIVER_PORT)
}

/// Format the `host:port` address for a matched pod.
///
/// A pod without an assigned IP renders with an empty host.
pub fn pod_address(pod: &Pod) -> String {
    let ip = pod
        .status
        .as_ref()
        .and_then(|s| s.pod_ip.as_deref())
        .unwrap_or_default();

    format!("{}:{}", ip, resolve_port(pod))
}
