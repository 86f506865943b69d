//! Database layer — migrations, queries, and cursor management.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::info;

use crate::errors::Result;
use crate::events::{CampaignEvent, EventRecord};

/// Establish a SQLite connection pool and run pending migrations.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    let url = if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else {
        format!("sqlite:{database_url}")
    };
    // Create the file when it does not exist yet.
    let url = if url.contains('?') || url.contains(":memory:") {
        url
    } else {
        format!("{url}?mode=rwc")
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied successfully");
    Ok(pool)
}

// ─────────────────────────────────────────────────────────
// Cursor helpers
// ─────────────────────────────────────────────────────────

/// Read the last-seen ledger from the cursor row.
/// Returns `0` when no cursor has been persisted yet.
pub async fn get_last_ledger(pool: &SqlitePool) -> Result<i64> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT last_ledger FROM indexer_cursor WHERE id = 1")
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(v,)| v).unwrap_or(0))
}

/// Persist the last-seen ledger (and optionally a pagination cursor string).
pub async fn save_cursor(
    pool: &SqlitePool,
    last_ledger: i64,
    last_cursor: Option<&str>,
) -> Result<()> {
    sqlx::query("UPDATE indexer_cursor SET last_ledger = ?1, last_cursor = ?2 WHERE id = 1")
        .bind(last_ledger)
        .bind(last_cursor)
        .execute(pool)
        .await?;
    Ok(())
}

/// Read back the raw cursor string (used to resume pagination mid-ledger).
pub async fn get_cursor_string(pool: &SqlitePool) -> Result<Option<String>> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT last_cursor FROM indexer_cursor WHERE id = 1")
            .fetch_optional(pool)
            .await?;
    Ok(row.and_then(|(v,)| v))
}

// ─────────────────────────────────────────────────────────
// Event writes
// ─────────────────────────────────────────────────────────

/// Persist a batch of decoded events in one transaction. An event whose
/// `event_id` is already stored is skipped, together with its selections,
/// so re-reading a ledger range is harmless.
///
/// Returns the number of newly stored events.
pub async fn insert_events(pool: &SqlitePool, events: &[CampaignEvent]) -> Result<usize> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for ev in events {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO events
                (event_id, event_type, voter, token_id, ticket_hash, detail,
                 ledger, timestamp, contract_id, tx_hash)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&ev.event_id)
        .bind(&ev.event_type)
        .bind(&ev.voter)
        .bind(ev.token_id)
        .bind(&ev.ticket_hash)
        .bind(&ev.detail)
        .bind(ev.ledger)
        .bind(ev.timestamp)
        .bind(&ev.contract_id)
        .bind(&ev.tx_hash)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            continue;
        }
        count += 1;

        let row_id = result.last_insert_rowid();
        for candidate_id in &ev.candidate_ids {
            sqlx::query(
                "INSERT OR IGNORE INTO vote_selections (event_row, candidate_id) VALUES (?1, ?2)",
            )
            .bind(row_id)
            .bind(i64::from(*candidate_id))
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    Ok(count)
}

// ─────────────────────────────────────────────────────────
// Event reads
// ─────────────────────────────────────────────────────────

/// Fetch all events, ordered by ledger ascending.
pub async fn get_all_events(pool: &SqlitePool) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(
        r#"
        SELECT id, event_id, event_type, voter, token_id, ticket_hash, detail,
               ledger, timestamp, contract_id, tx_hash, created_at
        FROM   events
        ORDER  BY ledger ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch every event naming `voter` (their `voted` and `transfer` events).
pub async fn get_events_for_voter(pool: &SqlitePool, voter: &str) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(
        r#"
        SELECT id, event_id, event_type, voter, token_id, ticket_hash, detail,
               ledger, timestamp, contract_id, tx_hash, created_at
        FROM   events
        WHERE  voter = ?1
        ORDER  BY ledger ASC, id ASC
        "#,
    )
    .bind(voter)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Candidate ids of a single stored event, ascending.
pub async fn get_selections(pool: &SqlitePool, event_row: i64) -> Result<Vec<u32>> {
    let rows: Vec<(i64,)> = sqlx::query_as(
        "SELECT candidate_id FROM vote_selections WHERE event_row = ?1 ORDER BY candidate_id ASC",
    )
    .bind(event_row)
    .fetch_all(pool)
    .await?;
    Ok(rows
        .into_iter()
        .filter_map(|(id,)| u32::try_from(id).ok())
        .collect())
}

/// Sparse `(candidate_id, votes)` pairs over every stored `voted` event.
pub async fn get_tally(pool: &SqlitePool) -> Result<Vec<(u32, u64)>> {
    let rows: Vec<(i64, i64)> = sqlx::query_as(
        r#"
        SELECT s.candidate_id, COUNT(*)
        FROM   vote_selections s
        JOIN   events e ON e.id = s.event_row
        WHERE  e.event_type = 'voted'
        GROUP  BY s.candidate_id
        ORDER  BY s.candidate_id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows
        .into_iter()
        .filter_map(|(id, votes)| Some((u32::try_from(id).ok()?, u64::try_from(votes).ok()?)))
        .collect())
}

/// Migrated in-memory database. One connection, so every query sees the
/// same memory store.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}
