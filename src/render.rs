//! Text rendering for tool responses
//!
//! Every tool returns plain text; these are the templates. Keeping them pure
//! (no I/O, no error types) makes the exact output testable.

use std::fmt::Display;

use kubepeek_types::PodRecord;

/// Human-readable description of a pod query's scope
pub fn pod_scope(namespace: &str, all_namespaces: bool) -> String {
    if all_namespaces {
        "ALL namespaces".to_string()
    } else {
        format!("namespace '{namespace}'")
    }
}

/// Render a pod listing: scope + identity header, then one block per pod
pub fn format_pods(pods: &[PodRecord], scope: &str, identity: &str) -> String {
    if pods.is_empty() {
        return format!("No pods found in {scope}\nIdentity: {identity}");
    }

    let mut lines = vec![format!("Pods in {scope}\nIdentity: {identity}\n")];
    for pod in pods {
        lines.push(format!(
            "  • {} (ns: {})\n    Status: {} | Node: {}\n    Ready: {} | Restarts: {}",
            pod.name,
            pod.namespace,
            pod.phase,
            pod.node,
            pod.ready_status(),
            pod.restarts
        ));
    }
    lines.join("\n")
}

pub fn pods_api_error(status: u16, reason: &str, body: &str) -> String {
    format!("Error: API call failed with status {status}: {reason}\nBody: {body}")
}

pub fn pods_config_error(error: impl Display) -> String {
    format!("Error: Could not configure Kubernetes client. {error}")
}

pub fn pods_unexpected_error(error: impl Display) -> String {
    format!("An unexpected error occurred: {error}")
}

pub fn health_passed(server_version: &str, identity: &str) -> String {
    format!(
        "✓ Health Check Passed\n\n\
         Successfully connected to Kubernetes API server.\n\
         Server Version: {server_version}\n\
         Identity: {identity}"
    )
}

/// Failure banner for configuration and API faults
pub fn health_unreachable(error: impl Display) -> String {
    format!("✗ Health check failed: Could not connect to Kubernetes.\nError: {error}")
}

/// Failure banner for anything else
pub fn health_failed(error: impl Display) -> String {
    format!("✗ Health check failed: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, ready: usize, total: usize, restarts: i32, node: &str) -> PodRecord {
        PodRecord {
            name: name.to_string(),
            namespace: "kube-system".to_string(),
            phase: "Running".to_string(),
            node: node.to_string(),
            ready,
            total,
            restarts,
        }
    }

    #[test]
    fn test_pod_scope() {
        assert_eq!(pod_scope("default", false), "namespace 'default'");
        assert_eq!(pod_scope("ignored", true), "ALL namespaces");
    }

    #[test]
    fn test_empty_listing_is_exact() {
        let out = format_pods(&[], "namespace 'default'", "context=dev, user=alice");
        assert_eq!(
            out,
            "No pods found in namespace 'default'\nIdentity: context=dev, user=alice"
        );
    }

    #[test]
    fn test_listing_has_one_block_per_pod() {
        let pods = vec![
            record("coredns-1", 1, 1, 0, "n1"),
            record("coredns-2", 0, 1, 3, "unscheduled"),
        ];
        let out = format_pods(&pods, "namespace 'kube-system'", "context=dev, user=alice");

        assert!(out.starts_with("Pods in namespace 'kube-system'\nIdentity: context=dev, user=alice\n"));
        assert_eq!(out.matches("  • ").count(), pods.len());
        assert!(out.contains(
            "  • coredns-1 (ns: kube-system)\n    Status: Running | Node: n1\n    Ready: 1/1 | Restarts: 0"
        ));
        assert!(out.contains(
            "  • coredns-2 (ns: kube-system)\n    Status: Running | Node: unscheduled\n    Ready: 0/1 | Restarts: 3"
        ));
    }

    #[test]
    fn test_api_error_message() {
        assert_eq!(
            pods_api_error(403, "Forbidden", "pods is forbidden"),
            "Error: API call failed with status 403: Forbidden\nBody: pods is forbidden"
        );
    }

    #[test]
    fn test_health_banner_contains_version_and_identity() {
        let out = health_passed("v1.31.2", "context=dev, user=alice");
        assert!(out.starts_with("✓ Health Check Passed\n\n"));
        assert!(out.contains("Server Version: v1.31.2"));
        assert!(out.contains("Identity: context=dev, user=alice"));
    }

    #[test]
    fn test_health_failure_banners() {
        assert_eq!(
            health_unreachable("connection refused"),
            "✗ Health check failed: Could not connect to Kubernetes.\nError: connection refused"
        );
        assert_eq!(health_failed("boom"), "✗ Health check failed: boom");
    }
}
