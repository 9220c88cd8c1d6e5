//! Shared types for kubepeek
//!
//! This crate contains data structures used across multiple kubepeek crates.

use serde::{Deserialize, Serialize};

/// Node name reported for pods that have not been scheduled yet
pub const UNSCHEDULED_NODE: &str = "unscheduled";

/// Flat per-pod record derived from the cluster's pod object
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodRecord {
    pub name: String,
    pub namespace: String,

    /// Lifecycle phase as reported upstream (e.g. "Running", "Pending")
    pub phase: String,

    /// Assigned node, or [`UNSCHEDULED_NODE`] when the pod has no node yet
    pub node: String,

    /// Containers currently reporting ready
    pub ready: usize,

    /// Total containers with a reported status
    pub total: usize,

    /// Sum of restart counts across all containers
    pub restarts: i32,
}

impl PodRecord {
    /// Format readiness as "ready/total"
    pub fn ready_status(&self) -> String {
        format!("{}/{}", self.ready, self.total)
    }
}
