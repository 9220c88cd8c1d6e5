//! Kubernetes client for kubepeek
//!
//! This crate provides the cluster-facing layer: a per-context memoized
//! client accessor, kubeconfig identity resolution, and the read-only pod
//! and server-version queries.

mod client;
mod error;
mod pods;

pub use client::KubeAccessor;
pub use error::K8sError;
pub use pods::list_pods;

// Re-export types that are used in our public API
pub use kubepeek_types::PodRecord;
