use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::api::create_router;
use crate::application::LedgerService;

/// Finledger - in-memory bank account ledger API
#[derive(Parser)]
#[command(name = "finledger")]
#[command(about = "An in-memory bank account ledger exposed over a small HTTP API")]
#[command(version)]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(short, long, default_value = "127.0.0.1:3333")]
    pub bind: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let default_filter = if self.verbose {
            "finledger=debug,tower_http=debug"
        } else {
            "finledger=info"
        };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
            )
            .init();

        let service = Arc::new(LedgerService::new());
        let app = create_router(service).layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(&self.bind)
            .await
            .with_context(|| format!("failed to bind {}", self.bind))?;
        tracing::info!("listening on http://{}", self.bind);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install CTRL+C handler: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
}
