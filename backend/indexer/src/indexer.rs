//! Long-running background task that polls the Soroban RPC and writes
//! decoded campaign events to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::Config;
use crate::db;
use crate::errors::{IndexerError, Result};
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Poll until `shutdown` is cancelled. The cursor is saved after every
/// iteration, so a restart resumes where this one stopped.
pub async fn run(state: Arc<IndexerState>, shutdown: CancellationToken) {
    info!("Indexer starting — contract: {}", state.config.contract_id);

    let (mut current_ledger, mut cursor) = loop {
        match resume_point(&state.pool, state.config.start_ledger).await {
            Ok(point) => break point,
            Err(e) => error!("Cannot read indexer cursor (will retry): {e}"),
        }
        tokio::select! {
            _ = shutdown.cancelled() => return,
            _ = tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)) => {}
        }
    };

    info!("Resuming from ledger {current_ledger}");

    loop {
        let poll = poll_once(
            &state.pool,
            &state.client,
            &state.config,
            current_ledger,
            cursor.as_deref(),
        );
        let outcome = tokio::select! {
            _ = shutdown.cancelled() => break,
            outcome = poll => outcome,
        };

        match outcome {
            Ok((next_ledger, next_cursor)) => {
                current_ledger = next_ledger;
                cursor = next_cursor;
            }
            Err(e) => {
                error!("Indexer poll error: {e}");
            }
        }

        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)) => {}
        }
    }

    info!("Indexer stopped at ledger {current_ledger}");
}

/// Where to resume: the saved ledger and paging cursor, or `start_ledger`
/// when nothing has been saved yet.
async fn resume_point(pool: &SqlitePool, start_ledger: u32) -> Result<(u32, Option<String>)> {
    let last_ledger = db::get_last_ledger(pool).await?;
    let cursor = db::get_cursor_string(pool).await?;
    let ledger = match u32::try_from(last_ledger) {
        Ok(0) => start_ledger,
        Ok(ledger) => ledger,
        Err(_) => return Err(IndexerError::Cursor(last_ledger)),
    };
    Ok((ledger, cursor))
}

/// Perform a single poll iteration.
///
/// Returns `(next_start_ledger, next_cursor)`.
async fn poll_once(
    pool: &SqlitePool,
    client: &Client,
    config: &Config,
    start_ledger: u32,
    cursor: Option<&str>,
) -> Result<(u32, Option<String>)> {
    let (raw_events, next_cursor, latest_ledger) = rpc::fetch_events(
        client,
        &config.rpc_url,
        &config.contract_id,
        start_ledger,
        cursor,
        config.events_per_page,
    )
    .await?;

    if !raw_events.is_empty() {
        let decoded = rpc::decode_events(&raw_events, &config.contract_id);
        let inserted = db::insert_events(pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new records stored",
            raw_events.len(),
            inserted
        );
    }

    let next_ledger = advance_ledger(start_ledger, latest_ledger);

    // Persist cursor so restarts are deterministic.
    db::save_cursor(pool, next_ledger as i64, next_cursor.as_deref()).await?;

    Ok((next_ledger, next_cursor))
}

/// Next start ledger: the latest ledger the RPC reported, never going back.
fn advance_ledger(start_ledger: u32, latest_ledger: Option<u64>) -> u32 {
    latest_ledger
        .and_then(|l| u32::try_from(l).ok())
        .map(|l| l.max(start_ledger))
        .unwrap_or(start_ledger)
}
