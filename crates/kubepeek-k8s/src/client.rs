//! Client accessor for kubepeek

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use kube::Client;
use kube::config::{KubeConfigOptions, Kubeconfig};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::K8sError;

/// Identity string used when the kubeconfig has no usable context
const NO_IDENTITY: &str = "context=n/a, user=n/a";

/// Lazily-constructed, per-context cache of Kubernetes clients.
///
/// Clients are built on first use for a given context name and kept for the
/// process lifetime. There is no invalidation: a kubeconfig edited on disk is
/// not observed until restart. The cache mutex is held across construction,
/// so each context is built exactly once even under concurrent calls.
pub struct KubeAccessor {
    /// Explicit kubeconfig path; `None` uses kube's default resolution
    /// ($KUBECONFIG, then ~/.kube/config)
    kubeconfig_path: Option<PathBuf>,

    /// Connect/read timeout applied to every constructed client
    timeout: Duration,

    clients: Mutex<HashMap<Option<String>, Client>>,
}

impl KubeAccessor {
    pub fn new(kubeconfig_path: Option<PathBuf>, timeout: Duration) -> Self {
        Self {
            kubeconfig_path,
            timeout,
            clients: Mutex::new(HashMap::new()),
        }
    }

    fn read_kubeconfig(&self) -> Result<Kubeconfig, K8sError> {
        let kubeconfig = match &self.kubeconfig_path {
            Some(path) => Kubeconfig::read_from(path)?,
            None => Kubeconfig::read()?,
        };
        Ok(kubeconfig)
    }

    /// Get the client for a kubeconfig context, building and caching it on
    /// first use. `None` selects the kubeconfig's current context.
    pub async fn client_for(&self, context: Option<&str>) -> Result<Client, K8sError> {
        let key = context.map(str::to_string);
        let mut clients = self.clients.lock().await;

        if let Some(client) = clients.get(&key) {
            return Ok(client.clone());
        }

        debug!(context = context.unwrap_or("current"), "building kubernetes client");
        let kubeconfig = self.read_kubeconfig()?;
        let options = KubeConfigOptions {
            context: key.clone(),
            ..Default::default()
        };

        let mut config = kube::Config::from_custom_kubeconfig(kubeconfig, &options).await?;
        config.connect_timeout = Some(self.timeout);
        config.read_timeout = Some(self.timeout);

        let client = Client::try_from(config)?;
        clients.insert(key, client.clone());
        Ok(client)
    }

    /// Resolve the `"context=<name>, user=<user>"` identity string for a
    /// context, falling back to the current context when no name is given or
    /// the name is unknown. Never fails: an unreadable kubeconfig is logged
    /// and rendered as an unknown identity.
    pub fn identity(&self, context: Option<&str>) -> String {
        match self.read_kubeconfig() {
            Ok(kubeconfig) => resolve_identity(&kubeconfig, context),
            Err(e) => {
                warn!(
                    context = context.unwrap_or("current"),
                    error = %e,
                    "failed to read kubeconfig while resolving identity"
                );
                format!("context={}, user=unknown", context.unwrap_or("unknown"))
            }
        }
    }

    /// Connectivity probe: ask the API server for its version and return the
    /// git version string.
    pub async fn server_version(&self, context: Option<&str>) -> Result<String, K8sError> {
        let client = self.client_for(context).await?;
        let info = client.apiserver_version().await?;
        Ok(info.git_version)
    }
}

fn resolve_identity(kubeconfig: &Kubeconfig, requested: Option<&str>) -> String {
    let named = requested
        .and_then(|name| kubeconfig.contexts.iter().find(|c| c.name == name))
        .or_else(|| {
            let current = kubeconfig.current_context.as_deref()?;
            kubeconfig.contexts.iter().find(|c| c.name == current)
        });

    let Some(ctx) = named else {
        return NO_IDENTITY.to_string();
    };

    let user = ctx
        .context
        .as_ref()
        .and_then(|c| c.user.clone())
        .unwrap_or_else(|| "n/a".to_string());
    format!("context={}, user={}", ctx.name, user)
}
