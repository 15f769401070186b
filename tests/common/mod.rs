//! Shared fixtures for integration tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, ContainerStatus, Pod, PodSpec, PodStatus,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::ListParams;
use pod_ready::pods::{ListError, PodLister};
use pod_ready::RUN_CONTAINER_NAME;

/// What one `list` call returns.
#[derive(Clone)]
#[allow(dead_code)]
pub enum Tick {
    Pods(Vec<Pod>),
    Fail(&'static str),
}

/// A pod lister that replays a script of ticks.
///
/// Each call consumes one tick; the last tick repeats forever.
pub struct FakePodLister {
    ticks: Mutex<VecDeque<Tick>>,
    delay: Duration,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakePodLister {
    pub fn scripted(ticks: Vec<Tick>) -> Self {
        assert!(!ticks.is_empty(), "script needs at least one tick");
        Self {
            ticks: Mutex::new(ticks.into()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(pods: Vec<Pod>) -> Self {
        Self::scripted(vec![Tick::Pods(pods)])
    }

    pub fn failing(message: &'static str) -> Self {
        Self::scripted(vec![Tick::Fail(message)])
    }

    /// Sleep this long inside every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PodLister for FakePodLister {
    async fn list(&self, _params: &ListParams) -> Result<Vec<Pod>, ListError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let tick = {
            let mut ticks = self.ticks.lock().unwrap();
            if ticks.len() > 1 {
                ticks.pop_front().unwrap()
            } else {
                ticks.front().cloned().unwrap()
            }
        };

        match tick {
            Tick::Pods(pods) => Ok(pods),
            Tick::Fail(message) => Err(ListError::Unavailable(message.to_string())),
        }
    }
}

/// Builder for ready test pods with a `role` label and a run container.
pub struct PodBuilder {
    pod: Pod,
}

#[allow(dead_code)]
impl PodBuilder {
    pub fn label(mut self, key: &str, value: &str) -> Self {
        self.pod
            .metadata
            .labels
            .get_or_insert_with(Default::default)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn ip(mut self, ip: &str) -> Self {
        self.status().pod_ip = Some(ip.to_string());
        self
    }

    /// Declare ports on the run container.
    pub fn ports(mut self, ports: &[i32]) -> Self {
        if let Some(spec) = self.pod.spec.as_mut() {
            for container in spec.containers.iter_mut().filter(|c| c.name == RUN_CONTAINER_NAME) {
                container.ports = Some(
                    ports
                        .iter()
                        .map(|p| ContainerPort {
                            container_port: *p,
                            ..Default::default()
                        })
                        .collect(),
                );
            }
        }
        self
    }

    /// Replace container statuses with one entry per flag.
    pub fn container_ready(mut self, ready: &[bool]) -> Self {
        self.status().container_statuses = Some(
            ready
                .iter()
                .enumerate()
                .map(|(i, r)| ContainerStatus {
                    name: format!("container-{}", i),
                    ready: *r,
                    ..Default::default()
                })
                .collect(),
        );
        self
    }

    pub fn build(self) -> Pod {
        self.pod
    }

    fn status(&mut self) -> &mut PodStatus {
        self.pod.status.get_or_insert_with(Default::default)
    }
}

/// A ready pod named `name` labelled `role=<role>`, whose run container declares no ports.
pub fn pod(name: &str, role: &str) -> PodBuilder {
    PodBuilder {
        pod: Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            spec: Some(PodSpec {
                containers: vec![Container {
                    name: RUN_CONTAINER_NAME.to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            status: Some(PodStatus {
                phase: Some("Running".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
    .label("role", role)
    .container_ready(&[true])
}
