//! Campaign Event Indexer — entry point.
//!
//! Starts a background indexer task that polls Soroban `getEvents` RPC for
//! campaign contract events and persists them to SQLite. Simultaneously
//! exposes a small Axum REST API with the indexed events and a vote tally.

mod api;
mod config;
mod db;
mod errors;
mod events;
mod indexer;
mod rpc;
mod tally;

use std::sync::Arc;

use axum::{routing::get, Router};
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use indexer::IndexerState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging (RUST_LOG controls verbosity).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load optional .env file (ignored if missing).
    let _ = dotenvy::dotenv();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("{e}"))?;

    // Set up the SQLite connection pool and run migrations.
    let pool = db::init_pool(&config.database_url).await?;

    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let shutdown = CancellationToken::new();

    // ─── Background indexer ───────────────────────────────
    let indexer_state = Arc::new(IndexerState {
        pool: pool.clone(),
        config: config.clone(),
        client,
    });
    let indexer_task = tokio::spawn(indexer::run(indexer_state, shutdown.clone()));

    // ─── REST API ─────────────────────────────────────────
    let api_state = Arc::new(api::ApiState {
        pool,
        candidate_count: config.candidate_count,
    });

    let app = Router::new()
        .route("/health", get(api::health))
        .route("/events", get(api::get_all_events))
        .route("/voters/:address/events", get(api::get_voter_events))
        .route("/tally", get(api::get_tally))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(api_state);

    let addr = format!("0.0.0.0:{}", config.api_port);
    info!("API listening on http://{addr}");

    tokio::spawn(wait_for_signal(shutdown.clone()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.clone().cancelled_owned())
        .await?;

    indexer_task.await?;
    info!("Shutdown complete");
    Ok(())
}

/// Cancel `shutdown` on SIGINT or SIGTERM.
async fn wait_for_signal(shutdown: CancellationToken) {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }

    shutdown.cancel();
}
