use thiserror::Error;

/// Faults from the cluster layer, split the way callers need to render them:
/// configuration problems, upstream API rejections, and everything else.
#[derive(Debug, Error)]
pub enum K8sError {
    /// The kubeconfig is missing, unreadable, malformed, or names an
    /// unknown context.
    #[error("{0}")]
    Config(#[from] kube::config::KubeconfigError),

    /// The API server rejected the call (auth, RBAC, not-found, ...).
    #[error("API call failed with status {status}: {reason}")]
    Api {
        status: u16,
        reason: String,
        body: String,
    },

    /// Transport, TLS, or serialization failure inside the client stack.
    #[error(transparent)]
    Client(kube::Error),
}

impl From<kube::Error> for K8sError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(e) => K8sError::Api {
                status: e.code,
                reason: e.reason,
                body: e.message,
            },
            other => K8sError::Client(other),
        }
    }
}
