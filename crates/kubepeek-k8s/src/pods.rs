//! Pod queries and mapping

use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, ListParams};
use kube::{Client, ResourceExt};
use tracing::debug;

use kubepeek_types::{PodRecord, UNSCHEDULED_NODE};

use crate::error::K8sError;

/// List pods and map them into flat records.
///
/// `all_namespaces` lists cluster-wide, which needs list permission on pods
/// at cluster scope upstream; otherwise only `namespace` is queried.
pub async fn list_pods(
    client: Client,
    namespace: &str,
    all_namespaces: bool,
) -> Result<Vec<PodRecord>, K8sError> {
    let api: Api<Pod> = if all_namespaces {
        Api::all(client)
    } else {
        Api::namespaced(client, namespace)
    };

    let pod_list = api.list(&ListParams::default()).await?;
    debug!(count = pod_list.items.len(), all_namespaces, "listed pods");

    Ok(pod_list.items.iter().map(to_record).collect())
}

/// Flatten an upstream pod object into a [`PodRecord`].
///
/// Pods that have not reported container statuses yet (e.g. still pending
/// admission) map to zero ready/total/restarts rather than an error.
fn to_record(pod: &Pod) -> PodRecord {
    let status = pod.status.as_ref();
    let container_statuses = status
        .and_then(|s| s.container_statuses.as_deref())
        .unwrap_or_default();

    PodRecord {
        name: pod.name_any(),
        namespace: pod.namespace().unwrap_or_default(),
        phase: status
            .and_then(|s| s.phase.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        node: pod
            .spec
            .as_ref()
            .and_then(|s| s.node_name.clone())
            .unwrap_or_else(|| UNSCHEDULED_NODE.to_string()),
        ready: container_statuses.iter().filter(|s| s.ready).count(),
        total: container_statuses.len(),
        restarts: container_statuses.iter().map(|s| s.restart_count).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{ContainerStatus, PodSpec, PodStatus};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn container_status(ready: bool, restart_count: i32) -> ContainerStatus {
        ContainerStatus {
            ready,
            restart_count,
            ..Default::default()
        }
    }

    fn pod(
        name: &str,
        namespace: &str,
        node: Option<&str>,
        statuses: Vec<ContainerStatus>,
    ) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            spec: Some(PodSpec {
                node_name: node.map(str::to_string),
                ..Default::default()
            }),
            status: Some(PodStatus {
                phase: Some("Running".to_string()),
                container_statuses: Some(statuses),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_record_counts_ready_and_restarts() {
        let pod = pod(
            "web-1",
            "default",
            Some("node-a"),
            vec![
                container_status(true, 2),
                container_status(false, 1),
                container_status(true, 0),
            ],
        );

        let rec = to_record(&pod);
        assert_eq!(rec.name, "web-1");
        assert_eq!(rec.namespace, "default");
        assert_eq!(rec.phase, "Running");
        assert_eq!(rec.node, "node-a");
        assert_eq!(rec.ready, 2);
        assert_eq!(rec.total, 3);
        assert_eq!(rec.restarts, 3);
        assert!(rec.ready <= rec.total);
    }

    #[test]
    fn test_record_without_container_statuses() {
        let mut bare = pod("init-0", "default", None, vec![]);
        bare.status = Some(PodStatus {
            phase: Some("Pending".to_string()),
            container_statuses: None,
            ..Default::default()
        });

        let rec = to_record(&bare);
        assert_eq!(rec.ready, 0);
        assert_eq!(rec.total, 0);
        assert_eq!(rec.restarts, 0);
        assert_eq!(rec.node, UNSCHEDULED_NODE);
        assert_eq!(rec.phase, "Pending");
    }

    #[test]
    fn test_record_without_status_at_all() {
        let mut bare = pod("ghost", "default", None, vec![]);
        bare.status = None;

        let rec = to_record(&bare);
        assert_eq!(rec.phase, "Unknown");
        assert_eq!(rec.ready, 0);
        assert_eq!(rec.total, 0);
    }
}
