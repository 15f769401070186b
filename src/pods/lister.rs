//! Pod listing backends.
//!
//! # Responsibilities
//! - Define the snapshot source the barrier polls
//! - Provide the Kubernetes API implementation
//!
//! # Design Decisions
//! - One call = one snapshot; no watch streams or caches
//! - Errors are reported, never retried here; the barrier owns retry timing

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, ListParams};
use kube::Client;
use thiserror::Error;

/// Errors that can occur while listing pods.
#[derive(Debug, Error)]
pub enum ListError {
    /// The Kubernetes API rejected or failed the request.
    #[error("Kubernetes API error: {0}")]
    Api(#[from] kube::Error),

    /// The backend could not produce a snapshot.
    #[error("Pod listing unavailable: {0}")]
    Unavailable(String),
}

/// A source of point-in-time pod snapshots.
#[async_trait]
pub trait PodLister: Send + Sync {
    /// List all pods visible to the caller.
    ///
    /// `params` may ask for server-side label filtering; callers must not rely on it.
    async fn list(&self, params: &ListParams) -> Result<Vec<Pod>, ListError>;
}

/// Lists pods through the Kubernetes API.
#[derive(Clone)]
pub struct KubePodLister {
    api: Api<Pod>,
    namespace: Option<String>,
}

impl KubePodLister {
    /// Create a lister scoped to `namespace`, or to all namespaces when `None`.
    pub fn new(client: Client, namespace: Option<&str>) -> Self {
        let api = match namespace {
            Some(ns) => Api::namespaced(client, ns),
            None => Api::all(client),
        };
        Self {
            api,
            namespace: namespace.map(str::to_string),
        }
    }

    /// Create a lister from the ambient kubeconfig or in-cluster service account.
    pub async fn try_default(namespace: Option<&str>) -> Result<Self, ListError> {
        let client = Client::try_default().await?;
        Ok(Self::new(client, namespace))
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

#[async_trait]
impl PodLister for KubePodLister {
    async fn list(&self, params: &ListParams) -> Result<Vec<Pod>, ListError> {
        let list = self.api.list(params).await?;
        tracing::trace!(
            namespace = self.namespace.as_deref().unwrap_or("*"),
            pods = list.items.len(),
            "Listed pods"
        );
        Ok(list.items)
    }
}
