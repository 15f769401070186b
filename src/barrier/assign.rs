//! Selector-to-pod assignment.
//!
//! # Rules
//! - Slots are filled strictly in selector order
//! - Each slot takes the first ready, unused pod (snapshot order) whose labels match
//! - A pod fills at most one slot, even when it matches several
//! - Any unfilled slot makes the whole attempt incomplete
//!
//! # Design Decisions
//! - Greedy, no backtracking: overlapping selectors are resolved left to right
//! - Stateless: every call starts from an empty assignment

use k8s_openapi::api::core::v1::Pod;
use thiserror::Error;

use crate::pods::{is_ready, labels_of, pod_address};
use crate::selector::{LabelMatcher, Selector};

/// A complete assignment: one pod per selector slot, in slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<'a> {
    pods: Vec<&'a Pod>,
}

impl<'a> Assignment<'a> {
    /// Matched pods, indexed by slot.
    pub fn pods(&self) -> &[&'a Pod] {
        &self.pods
    }

    /// `host:port` for every slot, in slot order.
    pub fn addresses(&self) -> Vec<String> {
        self.pods.iter().map(|pod| pod_address(pod)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pods.is_empty()
    }
}

/// The attempt could not fill every slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no unused ready pod matches selector slot {slot}")]
pub struct Incomplete {
    /// First slot left unfilled.
    pub slot: usize,
}

/// Assign one distinct ready pod to every selector, greedily and in order.
pub fn match_selectors<'a>(
    selectors: &[Selector],
    pods: &'a [Pod],
) -> Result<Assignment<'a>, Incomplete> {
    let mut used = vec![false; pods.len()];
    let mut assigned = Vec::with_capacity(selectors.len());

    for (slot, selector) in selectors.iter().enumerate() {
        let index = pods
            .iter()
            .enumerate()
            .find(|(i, pod)| !used[*i] && selector.matches(labels_of(pod)) && is_ready(pod))
            .map(|(i, _)| i)
            .ok_or(Incomplete { slot })?;

        used[index] = true;
        assigned.push(&pods[index]);
    }

    Ok(Assignment { pods: assigned })
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{ContainerStatus, PodStatus};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn pod(name: &str, role: &str, ready: bool) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                labels: Some([("role".to_string(), role.to_string())].into()),
                ..Default::default()
            },
            status: Some(PodStatus {
                pod_ip: Some(format!("ip-{}", name)),
                container_statuses: Some(vec![ContainerStatus {
                    name: "main".to_string(),
                    ready,
                    ..Default::default()
                }]),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn selectors(inputs: &[&str]) -> Vec<Selector> {
        Selector::parse_all(inputs).unwrap()
    }

    fn names(assignment: &Assignment<'_>) -> Vec<String> {
        assignment
            .pods()
            .iter()
            .map(|p| p.metadata.name.clone().unwrap())
            .collect()
    }

    #[test]
    fn test_slot_order_not_snapshot_order() {
        let snapshot = vec![
            pod("client-a", "client", true),
            pod("server", "server", true),
            pod("client-b", "client", true),
            pod("driver", "driver", true),
        ];
        let sel = selectors(&["role=driver", "role=server", "role=client", "role=client"]);

        let assignment = match_selectors(&sel, &snapshot).unwrap();
        assert_eq!(names(&assignment), ["driver", "server", "client-a", "client-b"]);
        assert_eq!(assignment.addresses()[0], "ip-driver:10000");
    }

    #[test]
    fn test_duplicate_selectors_need_distinct_pods() {
        let snapshot = vec![pod("client-a", "client", true)];
        let sel = selectors(&["role=client", "role=client"]);

        assert_eq!(match_selectors(&sel, &snapshot), Err(Incomplete { slot: 1 }));
    }

    #[test]
    fn test_unready_match_is_skipped() {
        let snapshot = vec![
            pod("client-a", "client", false),
            pod("client-b", "client", true),
        ];
        let sel = selectors(&["role=client"]);

        let assignment = match_selectors(&sel, &snapshot).unwrap();
        assert_eq!(names(&assignment), ["client-b"]);
    }

    #[test]
    fn test_greedy_without_backtracking() {
        // "role" takes the only server first, leaving nothing for "role=server".
        let snapshot = vec![pod("server", "server", true), pod("client", "client", true)];

        let greedy_fails = selectors(&["role", "role=server"]);
        assert_eq!(match_selectors(&greedy_fails, &snapshot), Err(Incomplete { slot: 1 }));

        let reordered = selectors(&["role=server", "role"]);
        let assignment = match_selectors(&reordered, &snapshot).unwrap();
        assert_eq!(names(&assignment), ["server", "client"]);
    }

    #[test]
    fn test_unlabelled_pod_never_matches() {
        let mut bare = pod("bare", "x", true);
        bare.metadata.labels = None;
        let snapshot = vec![bare];

        assert!(match_selectors(&selectors(&["hello=anyone-out-there"]), &snapshot).is_err());
        assert!(match_selectors(&selectors(&[""]), &snapshot).is_ok());
    }

    #[test]
    fn test_idempotent() {
        let snapshot = vec![pod("c1", "client", true), pod("c2", "client", true)];
        let sel = selectors(&["role=client", "role=client"]);

        let first = match_selectors(&sel, &snapshot).unwrap();
        let second = match_selectors(&sel, &snapshot).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_selectors() {
        let assignment = match_selectors(&[], &[]).unwrap();
        assert!(assignment.is_empty());
    }
}
