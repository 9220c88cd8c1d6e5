mod config;
mod render;
mod server;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};

use crate::server::KubepeekServer;

/// Kubepeek - read-only Kubernetes pod and health queries over MCP
#[derive(Parser, Debug)]
#[command(name = "kubepeek")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a kubeconfig file (defaults to $KUBECONFIG or ~/.kube/config)
    #[arg(long, value_name = "PATH")]
    kubeconfig: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the MCP stdio transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let service = KubepeekServer::new(args.kubeconfig).serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
