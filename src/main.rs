mod api;
mod app_state;
mod core;
mod domain;
mod errors;
mod routes;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app_state::build_app_state;
use crate::core::client::mongo_client::build_log_collection;
use crate::core::persistence::logs::log_repository::{LogRepository, LogRepositoryImpl};

const LISTEN_PORT: u16 = 8888;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let collection = build_log_collection().await?;
    info!("Connected to MongoDB!");

    let repo = LogRepositoryImpl::new(collection);
    // Safe to repeat across restarts: an equivalent existing index is a no-op.
    repo.ensure_ttl_index()
        .await
        .context("Could not create TTL index")?;

    let app = routes::app_router().with_state(build_app_state(repo));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", LISTEN_PORT))
        .await
        .with_context(|| format!("could not bind port {LISTEN_PORT}"))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
}
