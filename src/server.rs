//! MCP tool surface
//!
//! Registers the two read-only tools and acts as the terminal error boundary:
//! every fault is logged and rendered as text, never surfaced as a protocol
//! error. Callers distinguish success from failure only by content.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::error;

use kubepeek_k8s::{K8sError, KubeAccessor, PodRecord, list_pods};

use crate::config::{DEFAULT_NAMESPACE, DEFAULT_TIMEOUT};
use crate::render;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct HealthCheckArgs {
    /// Kubeconfig context to use (defaults to the current context)
    pub context: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetPodsArgs {
    /// Namespace to query (ignored when all_namespaces is set)
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// List pods across every namespace (requires cluster-wide list permission)
    #[serde(default)]
    pub all_namespaces: bool,

    /// Kubeconfig context to use (defaults to the current context)
    pub context: Option<String>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

#[derive(Clone)]
pub struct KubepeekServer {
    accessor: Arc<KubeAccessor>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl KubepeekServer {
    pub fn new(kubeconfig: Option<PathBuf>) -> Self {
        Self {
            accessor: Arc::new(KubeAccessor::new(kubeconfig, DEFAULT_TIMEOUT)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Verify cluster access and report the API server version and current identity"
    )]
    async fn health_check(
        &self,
        Parameters(args): Parameters<HealthCheckArgs>,
    ) -> Result<CallToolResult, McpError> {
        let context = args.context.as_deref();

        let text = match self.accessor.server_version(context).await {
            Ok(version) => {
                let identity = self.accessor.identity(context);
                render::health_passed(&version, &identity)
            }
            Err(e @ (K8sError::Config(_) | K8sError::Api { .. })) => {
                error!(error = %e, "health check could not reach the cluster");
                render::health_unreachable(e)
            }
            Err(e) => {
                error!(error = %e, "health check failed unexpectedly");
                render::health_failed(e)
            }
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "List pods with phase, node, readiness, and restart counts")]
    async fn get_pods(
        &self,
        Parameters(args): Parameters<GetPodsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let scope = render::pod_scope(&args.namespace, args.all_namespaces);

        let text = match self.fetch_pods(&args).await {
            Ok(pods) => {
                let identity = self.accessor.identity(args.context.as_deref());
                render::format_pods(&pods, &scope, &identity)
            }
            Err(K8sError::Api {
                status,
                reason,
                body,
            }) => {
                error!(status, reason = %reason, "kubernetes API error");
                render::pods_api_error(status, &reason, &body)
            }
            Err(e @ K8sError::Config(_)) => {
                error!(error = %e, "kubeconfig error");
                render::pods_config_error(e)
            }
            Err(e) => {
                error!(error = %e, "unexpected error while listing pods");
                render::pods_unexpected_error(e)
            }
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    async fn fetch_pods(&self, args: &GetPodsArgs) -> Result<Vec<PodRecord>, K8sError> {
        let client = self.accessor.client_for(args.context.as_deref()).await?;
        list_pods(client, &args.namespace, args.all_namespaces).await
    }
}

#[tool_handler]
impl ServerHandler for KubepeekServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only Kubernetes queries: health_check verifies cluster connectivity, \
                 get_pods lists pods in a namespace or across all namespaces."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
