//! Pod readiness barrier.
//!
//! Waits until every label selector in an ordered list is matched by a
//! distinct, ready pod, then reports each pod's `host:port` in selector
//! order. Used to hold back a distributed load test until its driver,
//! servers and clients are all up.

pub mod barrier;
pub mod cli;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod output;
pub mod pods;
pub mod selector;

pub use barrier::{wait_for_ready_pods, Barrier, ReadyError, WaitContext};
pub use config::ReadyConfig;
pub use lifecycle::Shutdown;
pub use pods::{PodLister, DEFAULT_DRIVER_PORT, RUN_CONTAINER_NAME};
pub use selector::Selector;
